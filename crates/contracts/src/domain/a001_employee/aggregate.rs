use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Статус сотрудника в кадровом учёте
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    OnLeave,
    Terminated,
    #[serde(other)]
    Unknown,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::OnLeave => "On leave",
            EmployeeStatus::Terminated => "Terminated",
            EmployeeStatus::Unknown => "Unknown",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Employee profile as returned by `/api/employees`.
///
/// `basic_salary`, `bank_account` and `tax_id` are payroll-sensitive and are
/// only rendered for roles that pass `Role::can_view_payroll`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub employee_code: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub date_of_joining: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub basic_salary: Option<f64>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Case-insensitive match against name, code, email and department.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        let hay = [
            Some(self.full_name()),
            Some(self.employee_code.clone()),
            self.email.clone(),
            self.department.clone(),
            self.designation.clone(),
        ];
        hay.iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        serde_json::from_str(
            r#"{
                "id": "42",
                "employee_code": "EMP-042",
                "first_name": "Asha ",
                "last_name": "Rao",
                "email": "asha.rao@example.com",
                "department": "Finance",
                "status": "on_leave"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let e = sample();
        assert_eq!(e.status, EmployeeStatus::OnLeave);
        assert_eq!(e.basic_salary, None);
        assert_eq!(e.phone, None);
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let e: Employee =
            serde_json::from_str(r#"{"id":"1","first_name":"A","status":"seconded"}"#).unwrap();
        assert_eq!(e.status, EmployeeStatus::Unknown);
    }

    #[test]
    fn test_full_name_trims() {
        assert_eq!(sample().full_name(), "Asha Rao");
        let e: Employee = serde_json::from_str(r#"{"id":"1","first_name":"Solo"}"#).unwrap();
        assert_eq!(e.full_name(), "Solo");
    }

    #[test]
    fn test_matches() {
        let e = sample();
        assert!(e.matches("finance"));
        assert!(e.matches("emp-042"));
        assert!(e.matches("  RAO "));
        assert!(e.matches(""));
        assert!(!e.matches("marketing"));
    }
}
