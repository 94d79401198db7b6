use crate::shared::totals::{money_eq, sum_by};
use serde::{Deserialize, Serialize};

/// One account line of `/api/accounts/trial-balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub account_code: String,
    pub account_name: String,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub credit: f64,
    /// Net balance as computed by the ledger.
    #[serde(default)]
    pub balance: f64,
}

impl TrialBalanceRow {
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.account_code.to_lowercase().contains(&q)
            || self.account_name.to_lowercase().contains(&q)
            || self
                .account_type
                .as_deref()
                .map(|t| t.to_lowercase().contains(&q))
                .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrialBalanceTotals {
    pub debit: f64,
    pub credit: f64,
    pub balance: f64,
}

impl TrialBalanceTotals {
    pub fn from_rows(rows: &[TrialBalanceRow]) -> Self {
        Self {
            debit: sum_by(rows, |r| r.debit),
            credit: sum_by(rows, |r| r.credit),
            balance: sum_by(rows, |r| r.balance),
        }
    }

    pub fn is_balanced(&self) -> bool {
        money_eq(self.debit, self.credit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, name: &str, debit: f64, credit: f64) -> TrialBalanceRow {
        TrialBalanceRow {
            account_code: code.to_string(),
            account_name: name.to_string(),
            account_type: Some("asset".to_string()),
            debit,
            credit,
            balance: debit - credit,
        }
    }

    #[test]
    fn test_balanced_totals() {
        let rows = vec![
            row("1000", "Cash", 5000.0, 0.0),
            row("2000", "Payables", 0.0, 3000.0),
            row("3000", "Equity", 0.0, 2000.0),
        ];
        let totals = TrialBalanceTotals::from_rows(&rows);
        assert_eq!(totals.debit, 5000.0);
        assert_eq!(totals.credit, 5000.0);
        assert_eq!(totals.balance, 0.0);
        assert!(totals.is_balanced());
    }

    #[test]
    fn test_unbalanced_totals() {
        let rows = vec![row("1000", "Cash", 10.0, 0.0)];
        assert!(!TrialBalanceTotals::from_rows(&rows).is_balanced());
        assert!(TrialBalanceTotals::from_rows(&[]).is_balanced());
    }

    #[test]
    fn test_matches() {
        let r = row("4100", "Sales Revenue", 0.0, 1.0);
        assert!(r.matches("4100"));
        assert!(r.matches("revenue"));
        assert!(r.matches("ASSET"));
        assert!(!r.matches("payroll"));
    }
}
