use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::recommendor::application::ports::incoming::use_cases::RecommendorError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/admin/recommendors/{id}/qrcodes")]
pub async fn regenerate_qrcodes_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match data.recommendors.regenerate_qr.regenerate(id).await {
        Ok(recommendor) => {
            info!(admin_id = admin.admin_id, recommendor_id = id, "QR codes regenerated");
            ApiResponse::success(recommendor)
        }

        Err(RecommendorError::NotFound) => {
            ApiResponse::not_found("RECOMMENDOR_NOT_FOUND", "Recommendor not found")
        }

        Err(RecommendorError::QrGeneration(msg)) => {
            error!(error = %msg, recommendor_id = id, "QR regeneration failed");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "QR_GENERATION_FAILED",
                "QR code generation failed",
            )
        }

        Err(e) => {
            error!(error = %e, "failed to regenerate QR codes");
            ApiResponse::internal_error()
        }
    }
}
