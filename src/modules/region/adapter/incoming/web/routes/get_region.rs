use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::region::application::ports::incoming::use_cases::RegionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/admin/regions/{id}")]
pub async fn get_region_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.regions.get.get(path.into_inner()).await {
        Ok(region) => ApiResponse::success(region),

        Err(RegionError::NotFound) => {
            ApiResponse::not_found("REGION_NOT_FOUND", "Region not found")
        }

        Err(e) => {
            error!(error = %e, "failed to fetch region");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::application::domain::entities::Region;
    use crate::region::application::ports::incoming::use_cases::MockGetRegionUseCase;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, static_token_provider};
    use actix_web::{test, App};
    use chrono::Utc;

    #[actix_web::test]
    async fn test_get_region_success() {
        let mut get = MockGetRegionUseCase::new();
        get.expect_get().withf(|id| *id == 7).returning(|id| {
            Ok(Region {
                id,
                name: "West Hills".into(),
                description: String::new(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

        let app_state = TestAppStateBuilder::default().with_get_region(get).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(1, "root"))
                .service(get_region_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/regions/7")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "West Hills");
    }

    #[actix_web::test]
    async fn test_get_missing_region_is_404() {
        let mut get = MockGetRegionUseCase::new();
        get.expect_get().returning(|_| Err(RegionError::NotFound));

        let app_state = TestAppStateBuilder::default().with_get_region(get).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(1, "root"))
                .service(get_region_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/regions/404")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
