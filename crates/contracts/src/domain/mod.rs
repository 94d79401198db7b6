pub mod a001_employee;
pub mod a002_budget;
pub mod a003_overtime;
pub mod a004_reimbursement;
pub mod a005_accounting_period;
