use std::{
    future::{ready, Ready},
    sync::Arc,
};

use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};

use crate::auth::application::domain::entities::AdminRole;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// A request carrying a valid admin token. Does not gate on role.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: i32,
    pub username: String,
    pub role: AdminRole,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedAdmin {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedAdmin {
                admin_id: claims.user_id,
                username: claims.username,
                role: claims.role,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Gate for back-office endpoints. Accepts both admin roles.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub admin_id: i32,
    pub username: String,
    pub role: AdminRole,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedAdmin::from_request(req, payload).into_inner() {
            Ok(admin) => {
                if !admin.role.is_admin_level() {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "FORBIDDEN",
                        "Admin access required",
                    ))));
                }

                ready(Ok(AdminUser {
                    admin_id: admin.admin_id,
                    username: admin.username,
                    role: admin.role,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

/// Gate for operations reserved to the super admin role.
#[derive(Debug, Clone)]
pub struct SuperAdminUser {
    pub admin_id: i32,
    pub username: String,
}

impl FromRequest for SuperAdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedAdmin::from_request(req, payload).into_inner() {
            Ok(admin) => {
                if !admin.role.is_super_admin() {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "FORBIDDEN",
                        "Super admin access required",
                    ))));
                }

                ready(Ok(SuperAdminUser {
                    admin_id: admin.admin_id,
                    username: admin.username,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

/// Identifies the caller when a token is present but never rejects the
/// request. Public listings use this to keep serving anonymous traffic.
#[derive(Debug, Clone)]
pub struct OptionalAdmin(pub Option<AuthenticatedAdmin>);

impl OptionalAdmin {
    pub fn is_admin_level(&self) -> bool {
        self.0
            .as_ref()
            .map(|a| a.role.is_admin_level())
            .unwrap_or(false)
    }
}

impl FromRequest for OptionalAdmin {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let admin = AuthenticatedAdmin::from_request(req, payload)
            .into_inner()
            .ok();
        ready(Ok(OptionalAdmin(admin)))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
