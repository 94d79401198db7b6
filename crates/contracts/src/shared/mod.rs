pub mod calendar;
pub mod totals;
