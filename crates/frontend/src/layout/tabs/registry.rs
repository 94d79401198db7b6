//! Tab content registry: маппинг tab.key → View.

use super::tab_labels::{detail_id, EMPLOYEE_DETAIL_PREFIX};
use crate::domain::a001_employee::ui::details::EmployeeDetail;
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::domain::a002_budget::ui::list::BudgetList;
use crate::domain::a003_overtime::ui::list::OvertimeList;
use crate::domain::a004_reimbursement::ui::list::ReimbursementList;
use crate::domain::a005_accounting_period::ui::list::AccountingPeriodList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_trial_balance::ui::list::TrialBalanceList;
use crate::system::pages::profile::ProfilePage;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// `tabs_store` lets detail views close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "a001_employee" => view! { <EmployeeList /> }.into_any(),
        k if detail_id(k, EMPLOYEE_DETAIL_PREFIX).is_some() => {
            let id = detail_id(k, EMPLOYEE_DETAIL_PREFIX)
                .unwrap_or_default()
                .to_string();
            view! {
                <EmployeeDetail
                    id=id
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }
        "a002_budget" => view! { <BudgetList /> }.into_any(),
        "a003_overtime" => view! { <OvertimeList /> }.into_any(),
        "a004_reimbursement" => view! { <ReimbursementList /> }.into_any(),
        "a005_accounting_period" => view! { <AccountingPeriodList /> }.into_any(),
        "p900_trial_balance" => view! { <TrialBalanceList /> }.into_any(),
        "sys_profile" => view! { <ProfilePage /> }.into_any(),
        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Unknown page"</div> }.into_any()
        }
    }
}
