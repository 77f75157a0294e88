use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::destination::application::ports::incoming::use_cases::DestinationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/admin/destinations/{id}")]
pub async fn delete_destination_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match data.destinations.delete.delete(id).await {
        Ok(()) => {
            info!(admin_id = admin.admin_id, destination_id = id, "destination deleted");
            ApiResponse::success(serde_json::json!({
                "message": "Destination deleted successfully"
            }))
        }

        Err(DestinationError::NotFound) => {
            ApiResponse::not_found("DESTINATION_NOT_FOUND", "Destination not found")
        }

        Err(e) => {
            error!(error = %e, "failed to delete destination");
            ApiResponse::internal_error()
        }
    }
}
