use crate::shared::api_utils::get_json;
use contracts::domain::a001_employee::aggregate::Employee;

pub async fn fetch_employees() -> Result<Vec<Employee>, String> {
    get_json("/api/employees").await
}

pub async fn fetch_employee(id: &str) -> Result<Employee, String> {
    get_json(&format!("/api/employees/{}", urlencoding::encode(id))).await
}
