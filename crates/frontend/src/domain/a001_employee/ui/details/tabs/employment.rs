use super::super::view_model::EmployeeDetailsVm;
use crate::shared::components::FieldRow;
use crate::shared::date_utils::format_date;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EmploymentTab(vm: EmployeeDetailsVm) -> impl IntoView {
    move || {
        vm.employee.get().map(|e| {
            let joined = e
                .date_of_joining
                .as_deref()
                .map(format_date)
                .unwrap_or_default();
            view! {
                <div class="details-section">
                    <h4 class="details-section__title">"Employment"</h4>
                    <table class="field-table">
                        <tbody>
                            <FieldRow label="Department" value=e.department.clone().unwrap_or_default() />
                            <FieldRow label="Designation" value=e.designation.clone().unwrap_or_default() />
                            <FieldRow label="Date of joining" value=joined />
                            <tr class="field-row">
                                <td class="field-row__label">"Status"</td>
                                <td class="field-row__value">
                                    <Badge appearance=BadgeAppearance::Tint>{e.status.label()}</Badge>
                                </td>
                            </tr>
                        </tbody>
                    </table>
                </div>
            }
        })
    }
}
