use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::recommendor::application::ports::incoming::use_cases::RecommendorError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/admin/recommendors/{id}")]
pub async fn delete_recommendor_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match data.recommendors.delete.delete(id).await {
        Ok(()) => {
            info!(admin_id = admin.admin_id, recommendor_id = id, "recommendor deleted");
            ApiResponse::success(serde_json::json!({
                "message": "Recommendor deleted successfully"
            }))
        }

        Err(RecommendorError::NotFound) => {
            ApiResponse::not_found("RECOMMENDOR_NOT_FOUND", "Recommendor not found")
        }

        Err(e) => {
            error!(error = %e, "failed to delete recommendor");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendor::application::ports::incoming::use_cases::MockDeleteRecommendorUseCase;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, static_token_provider};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_delete_recommendor_success() {
        let mut delete = MockDeleteRecommendorUseCase::new();
        delete
            .expect_delete()
            .withf(|id| *id == 8)
            .returning(|_| Ok(()));

        let app_state = TestAppStateBuilder::default()
            .with_delete_recommendor(delete)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(1, "root"))
                .service(delete_recommendor_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/admin/recommendors/8")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Recommendor deleted successfully");
    }

    #[actix_web::test]
    async fn test_delete_recommendor_not_found_is_404() {
        let mut delete = MockDeleteRecommendorUseCase::new();
        delete
            .expect_delete()
            .returning(|_| Err(RecommendorError::NotFound));

        let app_state = TestAppStateBuilder::default()
            .with_delete_recommendor(delete)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(1, "root"))
                .service(delete_recommendor_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/admin/recommendors/999")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
