use contracts::domain::a002_budget::aggregate::BudgetEntry;
use contracts::shared::calendar::fiscal_year_of;
use leptos::prelude::*;

use crate::shared::date_utils::today;

/// How many fiscal years back the selector offers.
pub const FISCAL_YEARS_BACK: i32 = 4;

#[derive(Clone, Debug)]
pub struct BudgetListState {
    pub entries: Vec<BudgetEntry>,
    pub fiscal_year: i32,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for BudgetListState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            fiscal_year: fiscal_year_of(today()),
            sort_field: "department".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<BudgetListState> {
    RwSignal::new(BudgetListState::default())
}

/// Current fiscal year first, then the previous ones.
pub fn fiscal_year_options(current: i32) -> Vec<i32> {
    (0..=FISCAL_YEARS_BACK).map(|back| current - back).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiscal_year_options() {
        assert_eq!(fiscal_year_options(2025), vec![2025, 2024, 2023, 2022, 2021]);
    }
}
