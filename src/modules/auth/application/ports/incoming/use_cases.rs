use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::AdminInfo;

// ========================= Login =========================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub expires_at: i64,
    pub user: AdminInfo,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account is {0}")]
    AccountInactive(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Token generation failed: {0}")]
    TokenError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn login(&self, command: LoginCommand) -> Result<LoginResult, LoginError>;
}

// ===================== Refresh token =====================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Admin not found")]
    AdminNotFound,

    #[error("Account is {0}")]
    AccountInactive(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Token generation failed: {0}")]
    TokenError(String),
}

/// Exchanges a still-valid token for a fresh one carrying the same identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn refresh(&self, token: &str) -> Result<LoginResult, RefreshTokenError>;
}

// ===================== Current admin =====================

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentAdminError {
    #[error("Admin not found")]
    AdminNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetCurrentAdminUseCase: Send + Sync {
    async fn get_current_admin(&self, admin_id: i32) -> Result<AdminInfo, GetCurrentAdminError>;
}

// ==================== Change password ====================

#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordCommand {
    #[serde(skip)]
    pub admin_id: i32,
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Old password is incorrect")]
    WrongOldPassword,

    #[error("New password must differ from the old one")]
    PasswordUnchanged,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Admin not found")]
    AdminNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Password hashing failed")]
    HashingFailed,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn change_password(
        &self,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError>;
}
