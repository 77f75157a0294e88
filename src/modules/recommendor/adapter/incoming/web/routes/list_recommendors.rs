use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::{AdminUser, OptionalAdmin};
use crate::recommendor::application::domain::entities::Gender;
use crate::recommendor::application::ports::incoming::use_cases::{
    ListVisibility, RecommendorListQuery,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PaginationQuery;
use crate::AppState;

// Numeric and enum filters arrive as strings because these params are
// flattened alongside the pagination query; bad values are ignored.
fn parse_gender(raw: Option<String>) -> Option<Gender> {
    match raw.as_deref() {
        Some("male") => Some(Gender::Male),
        Some("female") => Some(Gender::Female),
        Some("other") => Some(Gender::Other),
        _ => None,
    }
}

fn parse_age(raw: Option<String>) -> Option<i32> {
    raw.as_deref().and_then(|v| v.parse().ok())
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct AdminRecommendorListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    pub district_code: Option<String>,
    pub status: Option<String>,
    pub min_age: Option<String>,
    pub max_age: Option<String>,
}

#[get("/admin/recommendors")]
pub async fn admin_list_recommendors_handler(
    _admin: AdminUser,
    params: web::Query<AdminRecommendorListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let query = RecommendorListQuery {
        page: params.pagination.into(),
        visibility: ListVisibility::Admin,
        name: non_empty(params.name),
        gender: parse_gender(params.gender),
        province_code: non_empty(params.province_code),
        city_code: non_empty(params.city_code),
        district_code: non_empty(params.district_code),
        region_terms: vec![],
        status: non_empty(params.status),
        min_age: parse_age(params.min_age),
        max_age: parse_age(params.max_age),
    };

    match data.recommendors.list.list(query).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "failed to list recommendors");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PublicRecommendorListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    pub district_code: Option<String>,
    /// Fuzzy region names matched against the composed region address.
    pub province: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub status: Option<String>,
    pub min_age: Option<String>,
    pub max_age: Option<String>,
}

#[get("/recommendors")]
pub async fn list_recommendors_handler(
    caller: OptionalAdmin,
    params: web::Query<PublicRecommendorListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

    // Logged-in admins browsing the public route see the unfiltered set.
    let visibility = if caller.is_admin_level() {
        ListVisibility::Admin
    } else {
        ListVisibility::Public
    };

    let region_terms = [params.province, params.city, params.district]
        .into_iter()
        .flatten()
        .filter(|t| !t.is_empty())
        .collect();

    let query = RecommendorListQuery {
        page: params.pagination.into(),
        visibility,
        name: non_empty(params.name),
        gender: parse_gender(params.gender),
        province_code: non_empty(params.province_code),
        city_code: non_empty(params.city_code),
        district_code: non_empty(params.district_code),
        region_terms,
        status: non_empty(params.status),
        min_age: parse_age(params.min_age),
        max_age: parse_age(params.max_age),
    };

    match data.recommendors.list.list(query).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "failed to list recommendors");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendor::application::domain::entities::Recommendor;
    use crate::recommendor::application::ports::incoming::use_cases::MockListRecommendorsUseCase;
    use crate::shared::pagination::PageResult;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, static_token_provider};
    use actix_web::{test, App};
    use chrono::{Duration, Utc};

    fn recommendor(id: i32) -> Recommendor {
        let now = Utc::now();
        Recommendor {
            id,
            name: format!("guide-{}", id),
            gender: Gender::Male,
            age: 30,
            id_number: format!("11010119900101{:04}", id),
            avatar: String::new(),
            bio: String::new(),
            valid_from: now - Duration::days(1),
            valid_until: now + Duration::days(365),
            phone: String::new(),
            email: String::new(),
            province_code: "110000".into(),
            city_code: "110100".into(),
            district_code: "110101".into(),
            region_address: "Beijing/Beijing/Dongcheng".into(),
            status: "active".into(),
            rating: 4.5,
            qr_code_web: String::new(),
            qr_code_wxapp: String::new(),
            destinations: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    fn page_of(data: Vec<Recommendor>, total: u64) -> PageResult<Recommendor> {
        PageResult {
            data,
            total,
            page: 1,
            page_size: 10,
            total_pages: total.div_ceil(10),
        }
    }

    #[actix_web::test]
    async fn test_admin_list_passes_filters() {
        let mut list = MockListRecommendorsUseCase::new();
        list.expect_list()
            .withf(|q| {
                q.visibility == ListVisibility::Admin
                    && q.gender == Some(Gender::Female)
                    && q.min_age == Some(25)
                    && q.max_age == Some(40)
                    && q.status.as_deref() == Some("inactive")
                    && q.region_terms.is_empty()
            })
            .returning(|_| Ok(page_of(vec![recommendor(1)], 1)));

        let app_state = TestAppStateBuilder::default()
            .with_list_recommendors(list)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(1, "root"))
                .service(admin_list_recommendors_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/recommendors?gender=female&min_age=25&max_age=40&status=inactive")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total"], 1);
    }

    #[actix_web::test]
    async fn test_public_list_needs_no_token_and_collects_region_terms() {
        let mut list = MockListRecommendorsUseCase::new();
        list.expect_list()
            .withf(|q| {
                q.visibility == ListVisibility::Public
                    && q.region_terms == vec!["Beijing".to_string(), "Dongcheng".to_string()]
            })
            .returning(|_| Ok(page_of(vec![recommendor(1), recommendor(2)], 2)));

        let app_state = TestAppStateBuilder::default()
            .with_list_recommendors(list)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(list_recommendors_handler))
                .await;

        let req = test::TestRequest::get()
            .uri("/recommendors?province=Beijing&district=Dongcheng")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_public_list_with_admin_token_sees_all_statuses() {
        let mut list = MockListRecommendorsUseCase::new();
        list.expect_list()
            .withf(|q| q.visibility == ListVisibility::Admin)
            .returning(|_| Ok(page_of(vec![recommendor(1)], 1)));

        let app_state = TestAppStateBuilder::default()
            .with_list_recommendors(list)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(1, "root"))
                .service(list_recommendors_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/recommendors")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_public_list_ignores_bad_numeric_filters() {
        let mut list = MockListRecommendorsUseCase::new();
        list.expect_list()
            .withf(|q| q.min_age.is_none() && q.gender.is_none())
            .returning(|_| Ok(page_of(vec![], 0)));

        let app_state = TestAppStateBuilder::default()
            .with_list_recommendors(list)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(list_recommendors_handler))
                .await;

        let req = test::TestRequest::get()
            .uri("/recommendors?min_age=abc&gender=robot")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
