use crate::shared::totals::sum_by;
use serde::{Deserialize, Serialize};

/// Budget line for one department/category within a fiscal year.
///
/// `variance` is filled in by the backend; the client only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub id: String,
    pub fiscal_year: i32,
    pub department: String,
    pub category: String,
    pub planned_amount: f64,
    #[serde(default)]
    pub actual_amount: f64,
    #[serde(default)]
    pub variance: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `POST /api/budgets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDto {
    pub fiscal_year: i32,
    pub department: String,
    pub category: String,
    pub planned_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BudgetDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.department.trim().is_empty() {
            return Err("Department is required".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required".to_string());
        }
        if !self.planned_amount.is_finite() || self.planned_amount < 0.0 {
            return Err("Planned amount must be a non-negative number".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetTotals {
    pub planned: f64,
    pub actual: f64,
}

impl BudgetTotals {
    pub fn from_entries(entries: &[BudgetEntry]) -> Self {
        Self {
            planned: sum_by(entries, |e| e.planned_amount),
            actual: sum_by(entries, |e| e.actual_amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(department: &str, planned: f64, actual: f64) -> BudgetEntry {
        BudgetEntry {
            id: department.to_string(),
            fiscal_year: 2025,
            department: department.to_string(),
            category: "Salaries".to_string(),
            planned_amount: planned,
            actual_amount: actual,
            variance: None,
            notes: None,
        }
    }

    #[test]
    fn test_totals() {
        let entries = vec![entry("HR", 5000.0, 4200.0), entry("IT", 12000.0, 13500.5)];
        let totals = BudgetTotals::from_entries(&entries);
        assert_eq!(totals.planned, 17000.0);
        assert_eq!(totals.actual, 17700.5);
        assert_eq!(BudgetTotals::from_entries(&[]), BudgetTotals::default());
    }

    #[test]
    fn test_validate() {
        let mut dto = BudgetDto {
            fiscal_year: 2025,
            department: "HR".to_string(),
            category: "Training".to_string(),
            planned_amount: 1000.0,
            notes: None,
        };
        assert!(dto.validate().is_ok());
        dto.planned_amount = -1.0;
        assert!(dto.validate().is_err());
        dto.planned_amount = 10.0;
        dto.category = "  ".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_notes_omitted_when_none() {
        let dto = BudgetDto {
            fiscal_year: 2025,
            department: "HR".to_string(),
            category: "Training".to_string(),
            planned_amount: 1000.0,
            notes: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("notes").is_none());
    }
}
