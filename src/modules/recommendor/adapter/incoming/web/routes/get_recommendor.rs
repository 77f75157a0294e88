use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::recommendor::application::ports::incoming::use_cases::RecommendorError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn fetch(id: i32, data: &AppState) -> actix_web::HttpResponse {
    match data.recommendors.get.get(id).await {
        Ok(recommendor) => ApiResponse::success(recommendor),

        Err(RecommendorError::NotFound) => {
            ApiResponse::not_found("RECOMMENDOR_NOT_FOUND", "Recommendor not found")
        }

        Err(e) => {
            error!(error = %e, "failed to fetch recommendor");
            ApiResponse::internal_error()
        }
    }
}

#[get("/recommendors/{id}")]
pub async fn get_recommendor_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(path.into_inner(), &data).await
}

#[get("/admin/recommendors/{id}")]
pub async fn admin_get_recommendor_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(path.into_inner(), &data).await
}
