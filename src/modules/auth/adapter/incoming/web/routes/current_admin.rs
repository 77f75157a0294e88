use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::auth::application::ports::incoming::use_cases::GetCurrentAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/auth/me")]
pub async fn current_admin_handler(
    admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.current_admin.get_current_admin(admin.admin_id).await {
        Ok(info) => ApiResponse::success(info),

        Err(GetCurrentAdminError::AdminNotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }

        Err(GetCurrentAdminError::RepositoryError(ref e)) => {
            error!(error = %e, "failed to load current admin");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AdminInfo, AdminRole};
    use crate::auth::application::ports::incoming::use_cases::MockGetCurrentAdminUseCase;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, static_token_provider};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_me_returns_identity_from_token() {
        let mut current = MockGetCurrentAdminUseCase::new();
        current
            .expect_get_current_admin()
            .withf(|id| *id == 9)
            .returning(|_| {
                Ok(AdminInfo {
                    id: 9,
                    username: "editor".to_string(),
                    name: "Editor".to_string(),
                    email: "editor@example.com".to_string(),
                    phone: String::new(),
                    avatar: String::new(),
                    role: AdminRole::Admin,
                    status: "active".to_string(),
                })
            });

        let app_state = TestAppStateBuilder::default()
            .with_current_admin(current)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(9, "editor"))
                .service(current_admin_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/auth/me")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 9);
        assert_eq!(body["data"]["username"], "editor");
    }

    #[actix_web::test]
    async fn test_me_for_vanished_admin_is_404() {
        let mut current = MockGetCurrentAdminUseCase::new();
        current
            .expect_get_current_admin()
            .returning(|_| Err(GetCurrentAdminError::AdminNotFound));

        let app_state = TestAppStateBuilder::default()
            .with_current_admin(current)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(9, "editor"))
                .service(current_admin_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/auth/me")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_me_without_token_is_401() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(9, "editor"))
                .service(current_admin_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/auth/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
