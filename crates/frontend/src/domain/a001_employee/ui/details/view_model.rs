use crate::domain::a001_employee::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, employee_detail_key};
use contracts::domain::a001_employee::aggregate::Employee;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct EmployeeDetailsVm {
    pub employee: RwSignal<Option<Employee>>,
    pub active_tab: RwSignal<&'static str>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    tabs_store: Option<AppGlobalContext>,
}

impl EmployeeDetailsVm {
    pub fn new() -> Self {
        Self {
            employee: RwSignal::new(None),
            active_tab: RwSignal::new("general"),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            tabs_store: use_context::<AppGlobalContext>(),
        }
    }

    pub fn title(&self) -> Signal<String> {
        let employee = self.employee;
        Signal::derive(move || {
            employee
                .get()
                .map(|e| e.full_name())
                .unwrap_or_else(|| "Employee".to_string())
        })
    }

    /// Fetches the record and renames the owning tab after the employee.
    pub fn load(&self, id: String) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match api::fetch_employee(&id).await {
                Ok(item) => {
                    if let Some(store) = this.tabs_store {
                        store.update_tab_title(
                            &employee_detail_key(&id),
                            &detail_tab_label("Employee", &item.full_name()),
                        );
                    }
                    this.employee.set(Some(item));
                }
                Err(e) => {
                    log::warn!("employee {} not loaded: {}", id, e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }
}

impl Default for EmployeeDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
