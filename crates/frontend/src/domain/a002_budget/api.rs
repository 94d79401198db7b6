use crate::shared::api_utils::{get_json, post_json, with_query};
use contracts::domain::a002_budget::aggregate::{BudgetDto, BudgetEntry};

/// Entries of the fiscal year starting in April of `fiscal_year`.
pub async fn fetch_budgets(fiscal_year: i32) -> Result<Vec<BudgetEntry>, String> {
    let year = fiscal_year.to_string();
    get_json(&with_query("/api/budgets", &[("year", &year)])).await
}

pub async fn create_budget(dto: &BudgetDto) -> Result<BudgetEntry, String> {
    log::info!(
        "creating budget entry {} / {} for FY {}",
        dto.department,
        dto.category,
        dto.fiscal_year
    );
    post_json("/api/budgets", dto).await
}
