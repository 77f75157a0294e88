use crate::auth::application::domain::entities::AdminRole;

/// Claims carried by a verified token.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminClaims {
    pub user_id: i32,
    pub username: String,
    pub role: AdminRole,
    pub expires_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenProvider: Send + Sync {
    fn issue_token(
        &self,
        user_id: i32,
        username: &str,
        role: AdminRole,
    ) -> Result<IssuedToken, TokenError>;

    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
}
