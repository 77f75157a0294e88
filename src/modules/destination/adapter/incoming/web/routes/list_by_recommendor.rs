use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::{AdminUser, OptionalAdmin};
use crate::destination::application::ports::incoming::use_cases::DestinationError;
use crate::recommendor::application::ports::incoming::use_cases::ListVisibility;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PaginationQuery;
use crate::AppState;

async fn fetch(
    recommendor_id: i32,
    visibility: ListVisibility,
    pagination: PaginationQuery,
    data: &AppState,
) -> actix_web::HttpResponse {
    match data
        .destinations
        .list_by_recommendor
        .list_for_recommendor(recommendor_id, visibility, pagination.into())
        .await
    {
        Ok(page) => ApiResponse::success(page),

        Err(DestinationError::RecommendorNotFound) => {
            ApiResponse::not_found("RECOMMENDOR_NOT_FOUND", "Recommendor not found")
        }

        Err(e) => {
            error!(error = %e, "failed to list destinations for recommendor");
            ApiResponse::internal_error()
        }
    }
}

#[get("/recommendors/{id}/destinations")]
pub async fn list_recommendor_destinations_handler(
    caller: OptionalAdmin,
    path: web::Path<i32>,
    params: web::Query<PaginationQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Logged-in admins browsing the public route see the unfiltered set.
    let visibility = if caller.is_admin_level() {
        ListVisibility::Admin
    } else {
        ListVisibility::Public
    };
    fetch(path.into_inner(), visibility, params.into_inner(), &data).await
}

#[get("/admin/recommendors/{id}/destinations")]
pub async fn admin_list_recommendor_destinations_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    params: web::Query<PaginationQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(
        path.into_inner(),
        ListVisibility::Admin,
        params.into_inner(),
        &data,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::application::domain::entities::Destination;
    use crate::destination::application::ports::incoming::use_cases::MockListDestinationsByRecommendorUseCase;
    use crate::shared::pagination::PageResult;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, static_token_provider};
    use actix_web::{test, App};
    use chrono::Utc;

    fn destination(id: i32) -> Destination {
        let now = Utc::now();
        Destination {
            id,
            recommendor_id: 7,
            name: format!("place-{}", id),
            description: String::new(),
            image: String::new(),
            address: String::new(),
            category: "food".into(),
            rating: 4.0,
            status: "active".into(),
            recommendor: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[actix_web::test]
    async fn test_public_list_for_recommendor() {
        let mut list = MockListDestinationsByRecommendorUseCase::new();
        list.expect_list_for_recommendor()
            .withf(|id, visibility, _| *id == 7 && *visibility == ListVisibility::Public)
            .returning(|_, _, _| {
                Ok(PageResult {
                    data: vec![destination(1)],
                    total: 1,
                    page: 1,
                    page_size: 10,
                    total_pages: 1,
                })
            });

        let app_state = TestAppStateBuilder::default()
            .with_list_by_recommendor(list)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_recommendor_destinations_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommendors/7/destinations")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_public_list_with_admin_token_sees_all_statuses() {
        let mut list = MockListDestinationsByRecommendorUseCase::new();
        list.expect_list_for_recommendor()
            .withf(|id, visibility, _| *id == 7 && *visibility == ListVisibility::Admin)
            .returning(|_, _, _| {
                Ok(PageResult {
                    data: vec![destination(1)],
                    total: 1,
                    page: 1,
                    page_size: 10,
                    total_pages: 1,
                })
            });

        let app_state = TestAppStateBuilder::default()
            .with_list_by_recommendor(list)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(1, "root"))
                .service(list_recommendor_destinations_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommendors/7/destinations")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_list_for_unknown_recommendor_is_404() {
        let mut list = MockListDestinationsByRecommendorUseCase::new();
        list.expect_list_for_recommendor()
            .returning(|_, _, _| Err(DestinationError::RecommendorNotFound));

        let app_state = TestAppStateBuilder::default()
            .with_list_by_recommendor(list)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_recommendor_destinations_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommendors/404/destinations")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "RECOMMENDOR_NOT_FOUND");
    }
}
