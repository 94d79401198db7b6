//! Employee details (MVVM)
//!
//! - view_model.rs: loaded record, sub-tab state
//! - page.rs: header, tab bar, tab routing
//! - tabs/: one component per sub-tab

mod page;
mod tabs;
mod view_model;

pub use page::EmployeeDetail;
