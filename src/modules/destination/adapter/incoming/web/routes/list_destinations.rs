use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::{AdminUser, OptionalAdmin};
use crate::destination::application::ports::incoming::use_cases::DestinationListQuery;
use crate::recommendor::application::ports::incoming::use_cases::ListVisibility;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PaginationQuery;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DestinationListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub recommendor_id: Option<String>,
}

fn build_query(params: DestinationListParams, visibility: ListVisibility) -> DestinationListQuery {
    DestinationListQuery {
        page: params.pagination.into(),
        visibility,
        name: params.name.filter(|v| !v.is_empty()),
        category: params.category.filter(|v| !v.is_empty()),
        status: params.status.filter(|v| !v.is_empty()),
        recommendor_id: params.recommendor_id.as_deref().and_then(|v| v.parse().ok()),
    }
}

#[get("/admin/destinations")]
pub async fn admin_list_destinations_handler(
    _admin: AdminUser,
    params: web::Query<DestinationListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = build_query(params.into_inner(), ListVisibility::Admin);
    match data.destinations.list.list(query).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "failed to list destinations");
            ApiResponse::internal_error()
        }
    }
}

#[get("/destinations")]
pub async fn list_destinations_handler(
    caller: OptionalAdmin,
    params: web::Query<DestinationListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Logged-in admins browsing the public route see the unfiltered set.
    let visibility = if caller.is_admin_level() {
        ListVisibility::Admin
    } else {
        ListVisibility::Public
    };
    let query = build_query(params.into_inner(), visibility);
    match data.destinations.list.list(query).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "failed to list destinations");
            ApiResponse::internal_error()
        }
    }
}
