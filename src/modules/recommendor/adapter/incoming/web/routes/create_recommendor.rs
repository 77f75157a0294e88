use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::recommendor::application::ports::incoming::use_cases::{
    CreateRecommendorCommand, RecommendorError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/admin/recommendors")]
pub async fn create_recommendor_handler(
    admin: AdminUser,
    req: web::Json<CreateRecommendorCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.recommendors.create.create(req.into_inner()).await {
        Ok(recommendor) => {
            info!(
                admin_id = admin.admin_id,
                recommendor_id = recommendor.id,
                "recommendor created"
            );
            ApiResponse::created(recommendor)
        }

        Err(RecommendorError::DuplicateIdNumber) => {
            ApiResponse::bad_request("ID_NUMBER_EXISTS", "ID number already exists")
        }

        Err(RecommendorError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(RecommendorError::QrGeneration(msg)) => {
            error!(error = %msg, "recommendor create rolled back after QR failure");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "QR_GENERATION_FAILED",
                "QR code generation failed",
            )
        }

        Err(e) => {
            error!(error = %e, "failed to create recommendor");
            ApiResponse::internal_error()
        }
    }
}
