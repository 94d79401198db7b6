use crate::shared::api_utils::get_json;
use contracts::projections::p900_trial_balance::dto::TrialBalanceRow;

pub async fn fetch_trial_balance() -> Result<Vec<TrialBalanceRow>, String> {
    get_json("/api/accounts/trial-balance").await
}
