use contracts::domain::a001_employee::aggregate::Employee;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct EmployeeListState {
    pub employees: Vec<Employee>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub is_loaded: bool,
}

impl Default for EmployeeListState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            search_query: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 25,
            is_loaded: false,
        }
    }
}

// State lives in the component scope and is dropped with the tab
pub fn create_state() -> RwSignal<EmployeeListState> {
    RwSignal::new(EmployeeListState::default())
}
