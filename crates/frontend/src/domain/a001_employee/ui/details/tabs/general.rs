//! Contact and identity fields

use super::super::view_model::EmployeeDetailsVm;
use crate::shared::components::FieldRow;
use leptos::prelude::*;

#[component]
pub fn GeneralTab(vm: EmployeeDetailsVm) -> impl IntoView {
    move || {
        vm.employee.get().map(|e| {
            view! {
                <div class="details-section">
                    <h4 class="details-section__title">"Personal"</h4>
                    <table class="field-table">
                        <tbody>
                            <FieldRow label="First name" value=e.first_name.clone() />
                            <FieldRow label="Last name" value=e.last_name.clone() />
                            <FieldRow label="Code" value=e.employee_code.clone() />
                            <FieldRow label="Email" value=e.email.clone().unwrap_or_default() />
                            <FieldRow label="Phone" value=e.phone.clone().unwrap_or_default() />
                        </tbody>
                    </table>
                </div>
            }
        })
    }
}
