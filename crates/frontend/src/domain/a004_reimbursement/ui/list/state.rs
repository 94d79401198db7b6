use contracts::domain::a004_reimbursement::aggregate::{Reimbursement, ReimbursementStatus};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::local_state;

const STORAGE_KEY: &str = "a004_reimbursement_list_v1";

/// Select value meaning "no status filter".
pub const ALL_STATUSES: &str = "all";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub status_filter: String,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            status_filter: ALL_STATUSES.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReimbursementListState {
    pub items: Vec<Reimbursement>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<ReimbursementListState> {
    RwSignal::new(ReimbursementListState::default())
}

/// Restored filter value. Unknown statuses fall back to "all".
pub fn restore_filter() -> String {
    let filter = local_state::load::<PersistedState>(STORAGE_KEY)
        .unwrap_or_default()
        .status_filter;
    if filter == ALL_STATUSES || filter.parse::<ReimbursementStatus>().is_ok() {
        filter
    } else {
        ALL_STATUSES.to_string()
    }
}

pub fn persist_filter(filter: &str) {
    local_state::save(
        STORAGE_KEY,
        &PersistedState {
            status_filter: filter.to_string(),
        },
    );
}

/// Claims visible under `filter` (a status wire value or "all").
pub fn apply_filter(items: &[Reimbursement], filter: &str) -> Vec<Reimbursement> {
    match filter.parse::<ReimbursementStatus>() {
        Ok(status) => items.iter().filter(|r| r.status == status).cloned().collect(),
        Err(_) => items.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(id: &str, status: ReimbursementStatus) -> Reimbursement {
        Reimbursement {
            id: id.to_string(),
            employee_id: "1".to_string(),
            employee_name: "Asha Rao".to_string(),
            category: "Travel".to_string(),
            description: String::new(),
            amount: 10.0,
            expense_date: "2025-03-01".to_string(),
            submitted_at: None,
            status,
            reviewer_comment: None,
        }
    }

    #[test]
    fn test_apply_filter() {
        let items = vec![
            claim("1", ReimbursementStatus::Pending),
            claim("2", ReimbursementStatus::Approved),
            claim("3", ReimbursementStatus::Pending),
        ];
        assert_eq!(apply_filter(&items, ALL_STATUSES).len(), 3);
        let pending = apply_filter(&items, "pending");
        assert_eq!(
            pending.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "3"]
        );
        assert!(apply_filter(&items, "rejected").is_empty());
    }

    #[test]
    fn test_unknown_status_claims_only_under_all() {
        let items = vec![
            claim("1", ReimbursementStatus::Unknown),
            claim("2", ReimbursementStatus::Approved),
        ];
        assert_eq!(apply_filter(&items, ALL_STATUSES).len(), 2);
        assert_eq!(apply_filter(&items, "approved").len(), 1);
        assert_eq!(apply_filter(&items, "unknown").len(), 2);
    }
}
