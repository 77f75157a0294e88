use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::destination::application::ports::incoming::use_cases::DestinationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn fetch(id: i32, data: &AppState) -> actix_web::HttpResponse {
    match data.destinations.get.get(id).await {
        Ok(destination) => ApiResponse::success(destination),

        Err(DestinationError::NotFound) => {
            ApiResponse::not_found("DESTINATION_NOT_FOUND", "Destination not found")
        }

        Err(e) => {
            error!(error = %e, "failed to fetch destination");
            ApiResponse::internal_error()
        }
    }
}

#[get("/destinations/{id}")]
pub async fn get_destination_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(path.into_inner(), &data).await
}

#[get("/admin/destinations/{id}")]
pub async fn admin_get_destination_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(path.into_inner(), &data).await
}
