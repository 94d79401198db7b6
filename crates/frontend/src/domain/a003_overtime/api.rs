use crate::shared::api_utils::{delete, get_json, post_json, with_query};
use contracts::domain::a003_overtime::aggregate::{OvertimeDto, OvertimeRecord};

pub async fn fetch_overtime(month: u32, year: i32) -> Result<Vec<OvertimeRecord>, String> {
    let month = month.to_string();
    let year = year.to_string();
    get_json(&with_query(
        "/api/overtime",
        &[("month", &month), ("year", &year)],
    ))
    .await
}

pub async fn create_overtime(dto: &OvertimeDto) -> Result<OvertimeRecord, String> {
    log::info!(
        "creating overtime for employee {} on {} ({} h)",
        dto.employee_id,
        dto.date,
        dto.hours
    );
    post_json("/api/overtime", dto).await
}

pub async fn delete_overtime(id: &str) -> Result<(), String> {
    log::info!("deleting overtime {}", id);
    delete(&format!("/api/overtime/{}", urlencoding::encode(id))).await
}
