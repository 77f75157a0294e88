use actix_web::{post, Responder};
use serde::Serialize;
use tracing::info;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;

#[derive(Serialize)]
struct LogoutResponse {
    message: &'static str,
}

/// Tokens are stateless, so logout only acknowledges. Clients discard the
/// token; it stays valid until its expiry.
#[post("/auth/logout")]
pub async fn logout_handler(admin: AuthenticatedAdmin) -> impl Responder {
    info!(admin_id = admin.admin_id, "admin logged out");
    ApiResponse::success(LogoutResponse {
        message: "Logged out successfully",
    })
}
