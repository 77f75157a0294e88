use actix_web::http::StatusCode;
use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::recommendor::application::ports::incoming::use_cases::{
    RecommendorError, UpdateRecommendorCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/admin/recommendors/{id}")]
pub async fn update_recommendor_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<UpdateRecommendorCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match data.recommendors.update.update(id, req.into_inner()).await {
        Ok(recommendor) => {
            info!(admin_id = admin.admin_id, recommendor_id = id, "recommendor updated");
            ApiResponse::success(recommendor)
        }

        Err(RecommendorError::NotFound) => {
            ApiResponse::not_found("RECOMMENDOR_NOT_FOUND", "Recommendor not found")
        }

        Err(RecommendorError::DuplicateIdNumber) => {
            ApiResponse::bad_request("ID_NUMBER_EXISTS", "ID number already exists")
        }

        Err(RecommendorError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(RecommendorError::QrGeneration(msg)) => {
            error!(error = %msg, recommendor_id = id, "QR refresh failed during update");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "QR_GENERATION_FAILED",
                "QR code generation failed",
            )
        }

        Err(e) => {
            error!(error = %e, "failed to update recommendor");
            ApiResponse::internal_error()
        }
    }
}
