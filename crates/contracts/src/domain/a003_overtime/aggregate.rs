use serde::{Deserialize, Serialize};

/// Overtime payroll row as returned by `/api/overtime?month=&year=`.
///
/// `amount` is the cost computed by the payroll backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub from_time: String,
    /// HH:MM
    pub to_time: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Body of `POST /api/overtime`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeDto {
    pub employee_id: String,
    pub date: String,
    pub from_time: String,
    pub to_time: String,
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
