pub mod app_state_builder;

use std::sync::Arc;

use actix_web::web;

use crate::auth::application::domain::entities::AdminRole;
use crate::auth::application::ports::outgoing::token_provider::{
    AdminClaims, IssuedToken, TokenError, TokenProvider,
};

/// Token provider that accepts any bearer token and resolves it to a fixed
/// admin identity, so handler tests can exercise protected routes without
/// real JWTs.
struct StaticTokenProvider {
    admin_id: i32,
    username: String,
}

impl TokenProvider for StaticTokenProvider {
    fn issue_token(
        &self,
        user_id: i32,
        username: &str,
        _role: AdminRole,
    ) -> Result<IssuedToken, TokenError> {
        Ok(IssuedToken {
            token: format!("static.{}.{}", user_id, username),
            expires_at: i64::MAX,
        })
    }

    fn verify_token(&self, _token: &str) -> Result<AdminClaims, TokenError> {
        Ok(AdminClaims {
            user_id: self.admin_id,
            username: self.username.clone(),
            role: AdminRole::SuperAdmin,
            expires_at: i64::MAX,
        })
    }
}

pub fn static_token_provider(
    admin_id: i32,
    username: &str,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StaticTokenProvider {
        admin_id,
        username: username.to_string(),
    });
    web::Data::new(provider)
}
