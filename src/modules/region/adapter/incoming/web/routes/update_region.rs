use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::region::application::ports::incoming::use_cases::{RegionError, UpdateRegionCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/admin/regions/{id}")]
pub async fn update_region_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<UpdateRegionCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match data.regions.update.update(id, req.into_inner()).await {
        Ok(region) => {
            info!(admin_id = admin.admin_id, region_id = id, "region updated");
            ApiResponse::success(region)
        }

        Err(RegionError::NotFound) => {
            ApiResponse::not_found("REGION_NOT_FOUND", "Region not found")
        }

        Err(RegionError::NameRequired) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Region name is required")
        }

        Err(RegionError::DuplicateName) => {
            ApiResponse::bad_request("REGION_NAME_EXISTS", "Region name already exists")
        }

        Err(e) => {
            error!(error = %e, "failed to update region");
            ApiResponse::internal_error()
        }
    }
}
