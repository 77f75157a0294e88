use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::region::application::ports::incoming::use_cases::RegionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/admin/regions/{id}")]
pub async fn delete_region_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match data.regions.delete.delete(id).await {
        Ok(()) => {
            info!(admin_id = admin.admin_id, region_id = id, "region deleted");
            ApiResponse::success(serde_json::json!({
                "message": "Region deleted successfully"
            }))
        }

        Err(RegionError::NotFound) => {
            ApiResponse::not_found("REGION_NOT_FOUND", "Region not found")
        }

        Err(RegionError::InUse) => {
            warn!(region_id = id, "region delete blocked: still referenced");
            ApiResponse::bad_request(
                "REGION_IN_USE",
                "Cannot delete region because it is being used by recommendors",
            )
        }

        Err(e) => {
            error!(error = %e, "failed to delete region");
            ApiResponse::internal_error()
        }
    }
}
