use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::AdminRole;
use crate::auth::application::ports::outgoing::token_provider::{
    AdminClaims, IssuedToken, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    user_id: i32,
    username: String,
    role: AdminRole,
    iss: String,
    iat: i64,
    nbf: i64,
    exp: i64,
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_token(
        &self,
        user_id: i32,
        username: &str,
        role: AdminRole,
    ) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.config.token_expiry_hours);

        let claims = Claims {
            user_id,
            username: username.to_string(),
            role,
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }

    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);

        let decoded = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("token verification failed: expired");
                    TokenError::Expired
                }
                _ => {
                    tracing::debug!("token verification failed: {}", e);
                    TokenError::Invalid
                }
            }
        })?;

        Ok(AdminClaims {
            user_id: decoded.claims.user_id,
            username: decoded.claims.username,
            role: decoded.claims.role,
            expires_at: decoded.claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_expiry(hours: i64) -> JwtConfig {
        JwtConfig {
            secret_key: "unit-test-secret-key-of-decent-length".into(),
            issuer: "tourism-recommender".into(),
            token_expiry_hours: hours,
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = JwtTokenService::new(config_with_expiry(24));
        let issued = service
            .issue_token(12, "root", AdminRole::SuperAdmin)
            .unwrap();

        let claims = service.verify_token(&issued.token).unwrap();
        assert_eq!(claims.user_id, 12);
        assert_eq!(claims.username, "root");
        assert_eq!(claims.role, AdminRole::SuperAdmin);
        assert_eq!(claims.expires_at, issued.expires_at);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtTokenService::new(config_with_expiry(-1));
        let issued = service.issue_token(1, "root", AdminRole::Admin).unwrap();

        let err = service.verify_token(&issued.token).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let service = JwtTokenService::new(config_with_expiry(24));
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "a-completely-different-secret-key-here".into(),
            issuer: "tourism-recommender".into(),
            token_expiry_hours: 24,
        });

        let issued = other.issue_token(1, "root", AdminRole::Admin).unwrap();
        let err = service.verify_token(&issued.token).unwrap_err();
        assert!(matches!(err, TokenError::Invalid));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = JwtTokenService::new(config_with_expiry(24));
        assert!(matches!(
            service.verify_token("not.a.jwt").unwrap_err(),
            TokenError::Invalid
        ));
    }
}
