//! Salary, bank and tax fields. Only rendered for payroll roles.

use super::super::view_model::EmployeeDetailsVm;
use crate::shared::components::table::format_money_opt;
use crate::shared::components::FieldRow;
use crate::system::auth::guard::RequireRole;
use contracts::system::auth::Role;
use leptos::prelude::*;

#[component]
pub fn PayrollTab(vm: EmployeeDetailsVm) -> impl IntoView {
    view! {
        <RequireRole allow=Role::can_view_payroll fallback="Payroll data is restricted to HR and administrators">
            {move || {
                vm.employee.get().map(|e| {
                    view! {
                        <div class="details-section">
                            <h4 class="details-section__title">"Payroll"</h4>
                            <table class="field-table">
                                <tbody>
                                    <FieldRow label="Basic salary" value=format_money_opt(e.basic_salary) />
                                    <FieldRow label="Bank account" value=e.bank_account.clone().unwrap_or_default() />
                                    <FieldRow label="Tax id" value=e.tax_id.clone().unwrap_or_default() />
                                </tbody>
                            </table>
                        </div>
                    }
                })
            }}
        </RequireRole>
    }
}
