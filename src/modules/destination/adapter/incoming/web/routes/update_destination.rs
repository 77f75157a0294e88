use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::destination::application::ports::incoming::use_cases::{
    DestinationError, UpdateDestinationCommand,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/admin/destinations/{id}")]
pub async fn update_destination_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<UpdateDestinationCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match data.destinations.update.update(id, req.into_inner()).await {
        Ok(destination) => {
            info!(admin_id = admin.admin_id, destination_id = id, "destination updated");
            ApiResponse::success(destination)
        }

        Err(DestinationError::NotFound) => {
            ApiResponse::not_found("DESTINATION_NOT_FOUND", "Destination not found")
        }

        Err(DestinationError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(e) => {
            error!(error = %e, "failed to update destination");
            ApiResponse::internal_error()
        }
    }
}
