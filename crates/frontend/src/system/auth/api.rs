use crate::shared::api_utils::{get_json, post_json, put_json, put_unit};
use contracts::system::auth::{
    ChangePasswordDto, LoginRequest, LoginResponse, UpdateProfileDto, UserProfile,
};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };
    post_json("/api/auth/login", &request).await
}

/// Current user for the stored token
pub async fn get_current_user() -> Result<UserProfile, String> {
    get_json("/api/auth/me").await
}

pub async fn update_profile(id: &str, dto: &UpdateProfileDto) -> Result<UserProfile, String> {
    let path = format!("/api/auth/{}", urlencoding::encode(id));
    let user = put_json(&path, dto).await?;
    log::info!("profile {} updated", id);
    Ok(user)
}

pub async fn change_password(id: &str, dto: &ChangePasswordDto) -> Result<(), String> {
    let path = format!("/api/auth/{}/password", urlencoding::encode(id));
    put_unit(&path, Some(dto)).await?;
    log::info!("password changed for {}", id);
    Ok(())
}
