use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::AdminRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Admin not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<AdminRecord, AdminRepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<AdminRecord, AdminRepositoryError>;

    /// Best-effort last-login bookkeeping.
    async fn record_login(&self, id: i32, at: DateTime<Utc>) -> Result<(), AdminRepositoryError>;

    async fn update_password(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<(), AdminRepositoryError>;
}
