use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginCommand>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = req.into_inner();
    info!(username = %command.username, "login attempt");

    match data.auth.login.login(command).await {
        Ok(result) => {
            info!(admin_id = result.user.id, "admin logged in");
            ApiResponse::success(result)
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::AccountInactive(status)) => {
            warn!(status = %status, "login failed: account not active");
            ApiResponse::forbidden(
                "ACCOUNT_INACTIVE",
                &format!("Account is {}", status),
            )
        }

        Err(LoginError::RepositoryError(ref e)) => {
            error!(error = %e, "login failed: repository error");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenError(ref e)) => {
            error!(error = %e, "login failed: token generation error");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AdminInfo, AdminRole};
    use crate::auth::application::ports::incoming::use_cases::{LoginResult, MockLoginUseCase};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    fn sample_login_result() -> LoginResult {
        LoginResult {
            token: "signed.jwt.token".to_string(),
            expires_at: 1_999_999_999,
            user: AdminInfo {
                id: 1,
                username: "root".to_string(),
                name: "Root".to_string(),
                email: "root@example.com".to_string(),
                phone: String::new(),
                avatar: String::new(),
                role: AdminRole::SuperAdmin,
                status: "active".to_string(),
            },
        }
    }

    #[actix_web::test]
    async fn test_login_success() {
        let mut login = MockLoginUseCase::new();
        login
            .expect_login()
            .returning(|_| Ok(sample_login_result()));

        let app_state = TestAppStateBuilder::default().with_login(login).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({"username": "root", "password": "secret"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["token"], "signed.jwt.token");
        assert_eq!(body["data"]["user"]["username"], "root");
        assert_eq!(body["data"]["user"]["role"], "super_admin");
        assert!(body["data"]["user"].get("password").is_none());
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials_is_401() {
        let mut login = MockLoginUseCase::new();
        login
            .expect_login()
            .returning(|_| Err(LoginError::InvalidCredentials));

        let app_state = TestAppStateBuilder::default().with_login(login).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({"username": "ghost", "password": "nope"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_inactive_account_is_403() {
        let mut login = MockLoginUseCase::new();
        login
            .expect_login()
            .returning(|_| Err(LoginError::AccountInactive("locked".to_string())));

        let app_state = TestAppStateBuilder::default().with_login(login).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({"username": "root", "password": "secret"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ACCOUNT_INACTIVE");
    }

    #[actix_web::test]
    async fn test_login_repository_error_is_500() {
        let mut login = MockLoginUseCase::new();
        login
            .expect_login()
            .returning(|_| Err(LoginError::RepositoryError("pool exhausted".to_string())));

        let app_state = TestAppStateBuilder::default().with_login(login).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({"username": "root", "password": "secret"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
