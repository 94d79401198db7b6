mod employment;
mod general;
mod payroll;

pub use employment::EmploymentTab;
pub use general::GeneralTab;
pub use payroll::PayrollTab;
