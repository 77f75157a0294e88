use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::region::application::ports::incoming::use_cases::RegionListQuery;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PaginationQuery;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegionListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub name: Option<String>,
}

#[get("/admin/regions")]
pub async fn list_regions_handler(
    _admin: AdminUser,
    params: web::Query<RegionListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let query = RegionListQuery {
        page: params.pagination.into(),
        name: params.name.filter(|n| !n.is_empty()),
    };

    match data.regions.list.list(query).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "failed to list regions");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::application::domain::entities::Region;
    use crate::region::application::ports::incoming::use_cases::MockListRegionsUseCase;
    use crate::shared::pagination::{PageResult, SortOrder};
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, static_token_provider};
    use actix_web::{test, App};
    use chrono::Utc;

    fn region(id: i32) -> Region {
        Region {
            id,
            name: format!("region-{}", id),
            description: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_list_regions_passes_filters_and_wraps_envelope() {
        let mut list = MockListRegionsUseCase::new();
        list.expect_list()
            .withf(|q| {
                q.page.page == 2
                    && q.page.page_size == 5
                    && q.page.sort_order == SortOrder::Desc
                    && q.name.as_deref() == Some("coast")
            })
            .returning(|q| {
                Ok(PageResult {
                    data: vec![region(1), region(2)],
                    total: 12,
                    page: q.page.page,
                    page_size: q.page.page_size,
                    total_pages: 3,
                })
            });

        let app_state = TestAppStateBuilder::default().with_list_regions(list).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(1, "root"))
                .service(list_regions_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/regions?page=2&page_size=5&sort_order=desc&name=coast")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total"], 12);
        assert_eq!(body["data"]["page"], 2);
        assert_eq!(body["data"]["total_pages"], 3);
        assert_eq!(body["data"]["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_list_regions_defaults_applied() {
        let mut list = MockListRegionsUseCase::new();
        list.expect_list()
            .withf(|q| q.page.page == 1 && q.page.page_size == 10 && q.name.is_none())
            .returning(|q| {
                Ok(PageResult {
                    data: vec![],
                    total: 0,
                    page: q.page.page,
                    page_size: q.page.page_size,
                    total_pages: 0,
                })
            });

        let app_state = TestAppStateBuilder::default().with_list_regions(list).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(1, "root"))
                .service(list_regions_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/regions")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
