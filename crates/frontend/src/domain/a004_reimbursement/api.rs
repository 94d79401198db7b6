use crate::shared::api_utils::{get_json, post_json, post_unit};
use contracts::domain::a004_reimbursement::aggregate::{
    NewReimbursementDto, Reimbursement, RejectReimbursementDto,
};

fn claim_path(id: &str, action: &str) -> String {
    format!("/api/reimbursements/{}/{}", urlencoding::encode(id), action)
}

pub async fn fetch_reimbursements() -> Result<Vec<Reimbursement>, String> {
    get_json("/api/reimbursements").await
}

pub async fn submit_reimbursement(dto: &NewReimbursementDto) -> Result<Reimbursement, String> {
    log::info!("submitting {} claim of {}", dto.category, dto.amount);
    post_json("/api/reimbursements", dto).await
}

pub async fn approve_reimbursement(id: &str) -> Result<(), String> {
    log::info!("approving claim {}", id);
    post_unit::<()>(&claim_path(id, "approve"), None).await
}

pub async fn reject_reimbursement(id: &str, reason: &str) -> Result<(), String> {
    log::info!("rejecting claim {}", id);
    let dto = RejectReimbursementDto {
        reason: reason.to_string(),
    };
    post_unit(&claim_path(id, "reject"), Some(&dto)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_path_encodes_id() {
        assert_eq!(claim_path("17", "approve"), "/api/reimbursements/17/approve");
        assert_eq!(claim_path("a/b", "reject"), "/api/reimbursements/a%2Fb/reject");
    }
}
