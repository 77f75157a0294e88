use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::{
    LoginResult, RefreshTokenError, RefreshTokenUseCase,
};
use crate::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError,
};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub struct RefreshTokenService {
    repository: Arc<dyn AdminRepository>,
    tokens: Arc<dyn TokenProvider>,
}

impl RefreshTokenService {
    pub fn new(repository: Arc<dyn AdminRepository>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { repository, tokens }
    }
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenService {
    async fn refresh(&self, token: &str) -> Result<LoginResult, RefreshTokenError> {
        let claims = self
            .tokens
            .verify_token(token)
            .map_err(|_| RefreshTokenError::InvalidToken)?;

        // The account state is re-checked so a disabled admin cannot keep
        // extending an old session.
        let admin = match self.repository.find_by_id(claims.user_id).await {
            Ok(admin) => admin,
            Err(AdminRepositoryError::NotFound) => return Err(RefreshTokenError::AdminNotFound),
            Err(AdminRepositoryError::Database(msg)) => {
                return Err(RefreshTokenError::RepositoryError(msg))
            }
        };

        if !admin.is_active() {
            return Err(RefreshTokenError::AccountInactive(admin.status.clone()));
        }

        let issued = self
            .tokens
            .issue_token(admin.id, &admin.username, admin.role)
            .map_err(|e| RefreshTokenError::TokenError(e.to_string()))?;

        Ok(LoginResult {
            token: issued.token,
            expires_at: issued.expires_at,
            user: admin.info(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AdminRecord, AdminRole};
    use crate::auth::application::ports::outgoing::admin_repository::MockAdminRepository;
    use crate::auth::application::ports::outgoing::token_provider::{
        AdminClaims, IssuedToken, MockTokenProvider, TokenError,
    };

    fn sample_admin(status: &str) -> AdminRecord {
        AdminRecord {
            id: 3,
            username: "ops".into(),
            password_hash: "$2b$12$hash".into(),
            role: AdminRole::Admin,
            name: "Ops".into(),
            email: "ops@example.com".into(),
            phone: String::new(),
            avatar: String::new(),
            status: status.into(),
            last_login: None,
        }
    }

    fn claims_for(id: i32) -> AdminClaims {
        AdminClaims {
            user_id: id,
            username: "ops".into(),
            role: AdminRole::Admin,
            expires_at: 1_000,
        }
    }

    #[tokio::test]
    async fn test_refresh_reissues_for_same_identity() {
        let mut tokens = MockTokenProvider::new();
        tokens
            .expect_verify_token()
            .returning(|_| Ok(claims_for(3)));
        tokens
            .expect_issue_token()
            .withf(|id, username, role| *id == 3 && username == "ops" && *role == AdminRole::Admin)
            .returning(|_, _, _| {
                Ok(IssuedToken {
                    token: "fresh.jwt".into(),
                    expires_at: 2_000,
                })
            });

        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(sample_admin("active")));

        let service = RefreshTokenService::new(Arc::new(repo), Arc::new(tokens));
        let result = service.refresh("old.jwt").await.unwrap();
        assert_eq!(result.token, "fresh.jwt");
        assert_eq!(result.user.id, 3);
    }

    #[tokio::test]
    async fn test_refresh_rejects_invalid_token() {
        let mut tokens = MockTokenProvider::new();
        tokens
            .expect_verify_token()
            .returning(|_| Err(TokenError::Expired));

        let service =
            RefreshTokenService::new(Arc::new(MockAdminRepository::new()), Arc::new(tokens));
        let err = service.refresh("stale.jwt").await.unwrap_err();
        assert!(matches!(err, RefreshTokenError::InvalidToken));
    }

    #[tokio::test]
    async fn test_refresh_rejects_deactivated_admin() {
        let mut tokens = MockTokenProvider::new();
        tokens
            .expect_verify_token()
            .returning(|_| Ok(claims_for(3)));

        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(sample_admin("suspended")));

        let service = RefreshTokenService::new(Arc::new(repo), Arc::new(tokens));
        let err = service.refresh("old.jwt").await.unwrap_err();
        assert!(matches!(err, RefreshTokenError::AccountInactive(_)));
    }

    #[tokio::test]
    async fn test_refresh_rejects_vanished_admin() {
        let mut tokens = MockTokenProvider::new();
        tokens
            .expect_verify_token()
            .returning(|_| Ok(claims_for(42)));

        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AdminRepositoryError::NotFound));

        let service = RefreshTokenService::new(Arc::new(repo), Arc::new(tokens));
        let err = service.refresh("old.jwt").await.unwrap_err();
        assert!(matches!(err, RefreshTokenError::AdminNotFound));
    }
}
