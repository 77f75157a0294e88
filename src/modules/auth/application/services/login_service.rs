use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginResult, LoginUseCase,
};
use crate::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError,
};
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub struct LoginService {
    repository: Arc<dyn AdminRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginService {
    pub fn new(
        repository: Arc<dyn AdminRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginUseCase for LoginService {
    async fn login(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        // Unknown username and wrong password answer identically so the
        // response does not reveal which usernames exist.
        let admin = match self.repository.find_by_username(&command.username).await {
            Ok(admin) => admin,
            Err(AdminRepositoryError::NotFound) => return Err(LoginError::InvalidCredentials),
            Err(AdminRepositoryError::Database(msg)) => {
                return Err(LoginError::RepositoryError(msg))
            }
        };

        let matches = self
            .hasher
            .verify_password(&command.password, &admin.password_hash)
            .unwrap_or(false);
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        if !admin.is_active() {
            return Err(LoginError::AccountInactive(admin.status.clone()));
        }

        let issued = self
            .tokens
            .issue_token(admin.id, &admin.username, admin.role)
            .map_err(|e| LoginError::TokenError(e.to_string()))?;

        // Login must not fail because bookkeeping did.
        if let Err(e) = self.repository.record_login(admin.id, Utc::now()).await {
            warn!(admin_id = admin.id, error = %e, "failed to record last login");
        }

        Ok(LoginResult {
            token: issued.token,
            expires_at: issued.expires_at,
            user: admin.info(),
        })
    }
}
