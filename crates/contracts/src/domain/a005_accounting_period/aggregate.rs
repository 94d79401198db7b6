use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    #[default]
    Open,
    Closed,
}

/// Accounting period state as returned by `/api/periods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingPeriod {
    /// YYYY-MM
    pub period: String,
    #[serde(default)]
    pub status: PeriodStatus,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub closed_by: Option<String>,
}

impl AccountingPeriod {
    pub fn is_closed(&self) -> bool {
        self.status == PeriodStatus::Closed
    }
}

/// Body of `POST /api/periods/close`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosePeriodDto {
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodKeyError {
    #[error("invalid period '{0}', expected YYYY-MM")]
    Format(String),
    #[error("month {0} is out of range")]
    Month(u32),
}

/// "YYYY-MM"
pub fn period_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

pub fn parse_period_key(key: &str) -> Result<(i32, u32), PeriodKeyError> {
    let (y, m) = key
        .trim()
        .split_once('-')
        .ok_or_else(|| PeriodKeyError::Format(key.to_string()))?;
    let year = y
        .parse::<i32>()
        .map_err(|_| PeriodKeyError::Format(key.to_string()))?;
    let month = m
        .parse::<u32>()
        .map_err(|_| PeriodKeyError::Format(key.to_string()))?;
    if !(1..=12).contains(&month) {
        return Err(PeriodKeyError::Month(month));
    }
    Ok((year, month))
}

/// Newest period first.
pub fn sort_periods_desc(periods: &mut [AccountingPeriod]) {
    periods.sort_by(|a, b| b.period.cmp(&a.period));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_key() {
        assert_eq!(period_key(2025, 3), "2025-03");
        assert_eq!(parse_period_key("2025-03"), Ok((2025, 3)));
        assert_eq!(parse_period_key(&period_key(2024, 12)), Ok((2024, 12)));
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        assert_eq!(parse_period_key("2025-13"), Err(PeriodKeyError::Month(13)));
        assert_eq!(parse_period_key("2025-00"), Err(PeriodKeyError::Month(0)));
        assert!(matches!(parse_period_key("202503"), Err(PeriodKeyError::Format(_))));
        assert!(matches!(parse_period_key("March-2025"), Err(PeriodKeyError::Format(_))));
    }

    #[test]
    fn test_sort_desc() {
        let mk = |p: &str| AccountingPeriod {
            period: p.to_string(),
            status: PeriodStatus::Open,
            closed_at: None,
            closed_by: None,
        };
        let mut items = vec![mk("2024-11"), mk("2025-02"), mk("2024-12")];
        sort_periods_desc(&mut items);
        let keys: Vec<&str> = items.iter().map(|p| p.period.as_str()).collect();
        assert_eq!(keys, vec!["2025-02", "2024-12", "2024-11"]);
    }

    #[test]
    fn test_status_defaults_to_open() {
        let p: AccountingPeriod = serde_json::from_str(r#"{"period":"2025-01"}"#).unwrap();
        assert!(!p.is_closed());
    }
}
