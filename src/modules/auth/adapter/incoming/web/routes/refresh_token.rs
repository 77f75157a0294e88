use actix_web::{post, web, HttpRequest, Responder};
use tracing::{error, warn};

use crate::auth::application::ports::incoming::use_cases::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/auth/refresh-token")]
pub async fn refresh_token_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = match req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        Some(t) => t.to_string(),
        None => {
            return ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            )
        }
    };

    match data.auth.refresh_token.refresh(&token).await {
        Ok(result) => ApiResponse::success(result),

        Err(RefreshTokenError::InvalidToken) | Err(RefreshTokenError::AdminNotFound) => {
            warn!("token refresh rejected");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(RefreshTokenError::AccountInactive(status)) => {
            warn!(status = %status, "token refresh rejected: account not active");
            ApiResponse::forbidden("ACCOUNT_INACTIVE", &format!("Account is {}", status))
        }

        Err(RefreshTokenError::RepositoryError(ref e)) => {
            error!(error = %e, "token refresh failed: repository error");
            ApiResponse::internal_error()
        }

        Err(RefreshTokenError::TokenError(ref e)) => {
            error!(error = %e, "token refresh failed: token generation error");
            ApiResponse::internal_error()
        }
    }
}
