use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    Accountant,
    #[default]
    Employee,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Hr => "HR",
            Role::Accountant => "Accountant",
            Role::Employee => "Employee",
            Role::Unknown => "Unknown",
        }
    }

    /// Salary, bank and tax fields of employee records.
    pub fn can_view_payroll(&self) -> bool {
        matches!(self, Role::Admin | Role::Hr)
    }

    pub fn can_manage_overtime(&self) -> bool {
        matches!(self, Role::Admin | Role::Hr)
    }

    pub fn can_review_reimbursements(&self) -> bool {
        matches!(self, Role::Admin | Role::Accountant)
    }

    pub fn can_manage_budgets(&self) -> bool {
        matches!(self, Role::Admin | Role::Accountant)
    }

    pub fn can_close_periods(&self) -> bool {
        matches!(self, Role::Admin | Role::Accountant)
    }

    /// Period closing and the trial balance.
    pub fn can_view_accounting(&self) -> bool {
        matches!(self, Role::Admin | Role::Accountant)
    }

    pub fn is_admin(&self) -> bool {
        *self == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Body of `PUT /api/auth/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateProfileDto {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if !self.email.contains('@') {
            return Err("Email is not valid".to_string());
        }
        Ok(())
    }
}

/// Body of `PUT /api/auth/:id/password`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordDto {
    /// `confirmation` never leaves the client.
    pub fn validate(&self, confirmation: &str) -> Result<(), String> {
        if self.current_password.is_empty() {
            return Err("Current password is required".to_string());
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "New password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        if self.new_password != confirmation {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }
}

/// JWT payload fields read by the client. Not verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub exp: Option<i64>, // seconds since epoch
}

impl TokenClaims {
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.map(|exp| exp <= now_secs).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_gates() {
        assert!(Role::Admin.can_view_payroll());
        assert!(Role::Hr.can_view_payroll());
        assert!(!Role::Accountant.can_view_payroll());
        assert!(!Role::Employee.can_view_payroll());

        assert!(Role::Hr.can_manage_overtime());
        assert!(!Role::Accountant.can_manage_overtime());

        for role in [Role::Admin, Role::Accountant] {
            assert!(role.can_review_reimbursements());
            assert!(role.can_manage_budgets());
            assert!(role.can_close_periods());
            assert!(role.can_view_accounting());
        }
        for role in [Role::Hr, Role::Employee, Role::Unknown] {
            assert!(!role.can_review_reimbursements());
            assert!(!role.can_manage_budgets());
            assert!(!role.can_close_periods());
            assert!(!role.can_view_accounting());
        }
    }

    #[test]
    fn test_unknown_role_deserializes() {
        let p: UserProfile =
            serde_json::from_str(r#"{"id":"7","name":"X","role":"auditor"}"#).unwrap();
        assert_eq!(p.role, Role::Unknown);
        assert!(!p.role.can_view_payroll());
        let p: UserProfile = serde_json::from_str(r#"{"id":"7","name":"X","role":"hr"}"#).unwrap();
        assert_eq!(p.role, Role::Hr);
    }

    #[test]
    fn test_change_password_validation() {
        let dto = ChangePasswordDto {
            current_password: "old-secret".to_string(),
            new_password: "short".to_string(),
        };
        assert!(dto.validate("short").is_err());

        let dto = ChangePasswordDto {
            current_password: "old-secret".to_string(),
            new_password: "long-enough".to_string(),
        };
        assert!(dto.validate("long-enough").is_ok());
        assert_eq!(
            dto.validate("long-enougH"),
            Err("Passwords do not match".to_string())
        );

        let dto = ChangePasswordDto {
            current_password: String::new(),
            new_password: "long-enough".to_string(),
        };
        assert!(dto.validate("long-enough").is_err());
    }

    #[test]
    fn test_profile_dto_validation() {
        let mut dto = UpdateProfileDto {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
        };
        assert!(dto.validate().is_ok());
        dto.email = "asha".to_string();
        assert!(dto.validate().is_err());
        dto.email = "asha@example.com".to_string();
        dto.name = "  ".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_claims_expiry() {
        let claims = TokenClaims {
            sub: "1".to_string(),
            email: None,
            name: None,
            role: Role::Admin,
            exp: Some(1_000),
        };
        assert!(claims.is_expired(1_000));
        assert!(!claims.is_expired(999));
        let no_exp = TokenClaims { exp: None, ..claims };
        assert!(!no_exp.is_expired(i64::MAX));
    }
}
