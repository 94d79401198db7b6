use crate::shared::api_utils::{get_json, post_unit, put_unit};
use contracts::domain::a005_accounting_period::aggregate::{AccountingPeriod, ClosePeriodDto};

pub async fn fetch_periods(closed_only: bool) -> Result<Vec<AccountingPeriod>, String> {
    let path = if closed_only {
        "/api/periods/closed"
    } else {
        "/api/periods"
    };
    get_json(path).await
}

pub async fn close_period(period: &str) -> Result<(), String> {
    log::info!("closing period {}", period);
    let dto = ClosePeriodDto {
        period: period.to_string(),
    };
    post_unit("/api/periods/close", Some(&dto)).await
}

pub async fn reopen_period(period: &str) -> Result<(), String> {
    log::info!("re-opening period {}", period);
    put_unit::<()>(
        &format!("/api/periods/{}/open", urlencoding::encode(period)),
        None,
    )
    .await
}
