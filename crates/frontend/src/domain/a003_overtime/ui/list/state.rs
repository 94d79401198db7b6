use chrono::Datelike;
use contracts::domain::a003_overtime::aggregate::OvertimeRecord;
use contracts::domain::a003_overtime::attendance::format_hours;
use contracts::domain::a003_overtime::buckets::PeriodBucket;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::date_utils::{month_name, today};
use crate::shared::local_state;

const STORAGE_KEY: &str = "a003_overtime_list_v1";

/// Part of the page state that survives reloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub month: u32,
    pub year: i32,
}

impl PersistedState {
    fn current() -> Self {
        let now = today();
        Self {
            month: now.month(),
            year: now.year(),
        }
    }

    /// Snapshots with an impossible month fall back to the current one.
    pub fn sanitized(self) -> Self {
        if (1..=12).contains(&self.month) {
            self
        } else {
            Self::current()
        }
    }
}

#[derive(Clone, Debug)]
pub struct OvertimeListState {
    pub records: Vec<OvertimeRecord>,
    pub month: u32,
    pub year: i32,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<OvertimeListState> {
    let persisted = local_state::load::<PersistedState>(STORAGE_KEY)
        .map(PersistedState::sanitized)
        .unwrap_or_else(PersistedState::current);
    RwSignal::new(OvertimeListState {
        records: Vec::new(),
        month: persisted.month,
        year: persisted.year,
        is_loaded: false,
    })
}

pub fn persist(state: &OvertimeListState) {
    local_state::save(
        STORAGE_KEY,
        &PersistedState {
            month: state.month,
            year: state.year,
        },
    );
}

/// Periods longer than a month are only partly covered by one loaded month.
pub fn bucket_label(bucket: PeriodBucket) -> String {
    match bucket {
        PeriodBucket::Day | PeriodBucket::Week | PeriodBucket::Month => bucket.label().to_string(),
        _ => format!("{} (loaded month)", bucket.label()),
    }
}

pub fn bucket_subtitle(hours: f64, month: u32, year: i32) -> String {
    format!("{} h from {} {}", format_hours(hours), month_name(month), year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_rejects_bad_month() {
        let ok = PersistedState { month: 3, year: 2025 };
        assert_eq!(ok.clone().sanitized(), ok);
        let bad = PersistedState { month: 13, year: 2025 }.sanitized();
        assert!((1..=12).contains(&bad.month));
    }

    #[test]
    fn test_persisted_json_shape() {
        let restored: PersistedState = serde_json::from_str(r#"{"month":11,"year":2024}"#).unwrap();
        assert_eq!(restored, PersistedState { month: 11, year: 2024 });
    }

    #[test]
    fn test_bucket_labels_name_loaded_month_scope() {
        assert_eq!(bucket_label(PeriodBucket::Day), "Today");
        assert_eq!(bucket_label(PeriodBucket::Month), "This month");
        assert_eq!(bucket_label(PeriodBucket::Quarter), "This quarter (loaded month)");
        assert_eq!(bucket_label(PeriodBucket::HalfYear), "This half-year (loaded month)");
        assert_eq!(bucket_label(PeriodBucket::FiscalYear), "Fiscal year (loaded month)");
    }

    #[test]
    fn test_bucket_subtitle_names_source_month() {
        let subtitle = bucket_subtitle(0.0, 3, 2025);
        assert!(subtitle.ends_with(" h from March 2025"), "{}", subtitle);
    }
}
