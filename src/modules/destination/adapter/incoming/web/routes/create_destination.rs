use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::destination::application::ports::incoming::use_cases::{
    CreateDestinationCommand, DestinationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/admin/destinations")]
pub async fn create_destination_handler(
    admin: AdminUser,
    req: web::Json<CreateDestinationCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.destinations.create.create(req.into_inner()).await {
        Ok(destination) => {
            info!(
                admin_id = admin.admin_id,
                destination_id = destination.id,
                "destination created"
            );
            ApiResponse::created(destination)
        }

        Err(DestinationError::RecommendorNotFound) => {
            ApiResponse::not_found("RECOMMENDOR_NOT_FOUND", "Recommendor not found")
        }

        Err(DestinationError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(e) => {
            error!(error = %e, "failed to create destination");
            ApiResponse::internal_error()
        }
    }
}
