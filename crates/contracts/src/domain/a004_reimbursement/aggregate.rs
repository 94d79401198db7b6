use crate::shared::totals::{sum_by, sum_filtered};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReimbursementStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reimbursement status '{0}'")]
pub struct UnknownStatusError(pub String);

impl ReimbursementStatus {
    pub const ALL: [ReimbursementStatus; 3] = [
        ReimbursementStatus::Pending,
        ReimbursementStatus::Approved,
        ReimbursementStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReimbursementStatus::Pending => "pending",
            ReimbursementStatus::Approved => "approved",
            ReimbursementStatus::Rejected => "rejected",
            ReimbursementStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReimbursementStatus::Pending => "Pending",
            ReimbursementStatus::Approved => "Approved",
            ReimbursementStatus::Rejected => "Rejected",
            ReimbursementStatus::Unknown => "Unknown",
        }
    }
}

/// Only the three workflow states parse; `unknown` is a read-side fallback.
impl FromStr for ReimbursementStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReimbursementStatus::Pending),
            "approved" => Ok(ReimbursementStatus::Approved),
            "rejected" => Ok(ReimbursementStatus::Rejected),
            other => Err(UnknownStatusError(other.to_string())),
        }
    }
}

/// Expense claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reimbursement {
    pub id: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    /// YYYY-MM-DD
    pub expense_date: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub status: ReimbursementStatus,
    #[serde(default)]
    pub reviewer_comment: Option<String>,
}

impl Reimbursement {
    pub fn is_pending(&self) -> bool {
        self.status == ReimbursementStatus::Pending
    }
}

/// Body of `POST /api/reimbursements`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewReimbursementDto {
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub expense_date: String,
}

impl NewReimbursementDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.category.trim().is_empty() {
            return Err("Category is required".to_string());
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err("Amount must be greater than zero".to_string());
        }
        if crate::shared::calendar::parse_iso_date(&self.expense_date).is_none() {
            return Err("Expense date is required".to_string());
        }
        Ok(())
    }
}

/// Body of `POST /api/reimbursements/:id/reject`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectReimbursementDto {
    pub reason: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReimbursementTotals {
    pub pending: f64,
    pub approved: f64,
    pub rejected: f64,
    pub total: f64,
    pub count: usize,
}

impl ReimbursementTotals {
    pub fn from_items(items: &[Reimbursement]) -> Self {
        let by_status =
            |status: ReimbursementStatus| sum_filtered(items, |r| r.status == status, |r| r.amount);
        Self {
            pending: by_status(ReimbursementStatus::Pending),
            approved: by_status(ReimbursementStatus::Approved),
            rejected: by_status(ReimbursementStatus::Rejected),
            total: sum_by(items, |r| r.amount),
            count: items.len(),
        }
    }

    pub fn for_status(&self, status: ReimbursementStatus) -> f64 {
        match status {
            ReimbursementStatus::Pending => self.pending,
            ReimbursementStatus::Approved => self.approved,
            ReimbursementStatus::Rejected => self.rejected,
            ReimbursementStatus::Unknown => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(id: &str, amount: f64, status: ReimbursementStatus) -> Reimbursement {
        Reimbursement {
            id: id.to_string(),
            employee_id: "1".to_string(),
            employee_name: "A".to_string(),
            category: "Travel".to_string(),
            description: String::new(),
            amount,
            expense_date: "2025-05-01".to_string(),
            submitted_at: None,
            status,
            reviewer_comment: None,
        }
    }

    #[test]
    fn test_status_wire_format() {
        let r: Reimbursement = serde_json::from_str(
            r#"{"id":"9","category":"Meals","amount":12.5,"expense_date":"2025-05-02","status":"approved"}"#,
        )
        .unwrap();
        assert_eq!(r.status, ReimbursementStatus::Approved);
        assert_eq!(
            serde_json::to_string(&ReimbursementStatus::Rejected).unwrap(),
            "\"rejected\""
        );
        for status in ReimbursementStatus::ALL {
            assert_eq!(status.as_str().parse::<ReimbursementStatus>(), Ok(status));
        }
        assert_eq!(
            "unknown".parse::<ReimbursementStatus>(),
            Err(UnknownStatusError("unknown".to_string()))
        );
    }

    #[test]
    fn test_unexpected_status_does_not_fail_list() {
        let items: Vec<Reimbursement> = serde_json::from_str(
            r#"[{"id":"1","category":"Meals","amount":10.0,"expense_date":"2025-05-02","status":"escalated"},
                {"id":"2","category":"Taxi","amount":5.0,"expense_date":"2025-05-03","status":"pending"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].status, ReimbursementStatus::Unknown);
        assert_eq!(items[1].status, ReimbursementStatus::Pending);
        let totals = ReimbursementTotals::from_items(&items);
        assert_eq!(totals.pending, 5.0);
        assert_eq!(totals.total, 15.0);
        assert_eq!(totals.for_status(ReimbursementStatus::Unknown), 0.0);
    }

    #[test]
    fn test_totals_by_status() {
        let items = vec![
            claim("1", 100.0, ReimbursementStatus::Pending),
            claim("2", 250.5, ReimbursementStatus::Approved),
            claim("3", 49.5, ReimbursementStatus::Pending),
            claim("4", 75.0, ReimbursementStatus::Rejected),
        ];
        let totals = ReimbursementTotals::from_items(&items);
        assert_eq!(totals.pending, 149.5);
        assert_eq!(totals.approved, 250.5);
        assert_eq!(totals.rejected, 75.0);
        assert_eq!(totals.total, 475.0);
        assert_eq!(totals.count, 4);
        assert_eq!(
            totals.pending + totals.approved + totals.rejected,
            totals.total
        );
    }

    #[test]
    fn test_validate_new_claim() {
        let mut dto = NewReimbursementDto {
            category: "Travel".to_string(),
            description: "Taxi".to_string(),
            amount: 18.0,
            expense_date: "2025-05-03".to_string(),
        };
        assert!(dto.validate().is_ok());
        dto.amount = 0.0;
        assert!(dto.validate().is_err());
        dto.amount = 18.0;
        dto.expense_date = String::new();
        assert!(dto.validate().is_err());
    }
}
