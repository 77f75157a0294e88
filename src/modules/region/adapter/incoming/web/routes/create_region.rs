use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::region::application::ports::incoming::use_cases::{CreateRegionCommand, RegionError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/admin/regions")]
pub async fn create_region_handler(
    admin: AdminUser,
    req: web::Json<CreateRegionCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.regions.create.create(req.into_inner()).await {
        Ok(region) => {
            info!(admin_id = admin.admin_id, region_id = region.id, "region created");
            ApiResponse::created(region)
        }

        Err(RegionError::NameRequired) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Region name is required")
        }

        Err(RegionError::DuplicateName) => {
            ApiResponse::bad_request("REGION_NAME_EXISTS", "Region name already exists")
        }

        Err(e) => {
            error!(error = %e, "failed to create region");
            ApiResponse::internal_error()
        }
    }
}
