use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
}

#[put("/auth/change-password")]
pub async fn change_password_handler(
    admin: AuthenticatedAdmin,
    req: web::Json<ChangePasswordDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = ChangePasswordCommand {
        admin_id: admin.admin_id,
        old_password: dto.old_password,
        new_password: dto.new_password,
    };

    match data.auth.change_password.change_password(command).await {
        Ok(()) => {
            info!(admin_id = admin.admin_id, "password changed");
            ApiResponse::success(serde_json::json!({
                "message": "Password changed successfully"
            }))
        }

        Err(ChangePasswordError::WrongOldPassword) => {
            warn!(admin_id = admin.admin_id, "password change rejected: wrong old password");
            ApiResponse::bad_request("WRONG_OLD_PASSWORD", "Old password is incorrect")
        }

        Err(ChangePasswordError::PasswordUnchanged) => ApiResponse::bad_request(
            "PASSWORD_UNCHANGED",
            "New password must differ from the old one",
        ),

        Err(ChangePasswordError::WeakPassword) => ApiResponse::bad_request(
            "WEAK_PASSWORD",
            "Password must be at least 6 characters",
        ),

        Err(ChangePasswordError::AdminNotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }

        Err(ChangePasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "password change failed: repository error");
            ApiResponse::internal_error()
        }

        Err(ChangePasswordError::HashingFailed) => {
            error!("password change failed: hashing error");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::MockChangePasswordUseCase;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, static_token_provider};
    use actix_web::{test, App};

    fn body_json() -> serde_json::Value {
        serde_json::json!({"old_password": "oldpass", "new_password": "newpass"})
    }

    #[actix_web::test]
    async fn test_change_password_success() {
        let mut change = MockChangePasswordUseCase::new();
        change
            .expect_change_password()
            .withf(|cmd| cmd.admin_id == 3 && cmd.new_password == "newpass")
            .returning(|_| Ok(()));

        let app_state = TestAppStateBuilder::default()
            .with_change_password(change)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(3, "ops"))
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/auth/change-password")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .set_json(body_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_change_password_wrong_old_is_400() {
        let mut change = MockChangePasswordUseCase::new();
        change
            .expect_change_password()
            .returning(|_| Err(ChangePasswordError::WrongOldPassword));

        let app_state = TestAppStateBuilder::default()
            .with_change_password(change)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(3, "ops"))
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/auth/change-password")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .set_json(body_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "WRONG_OLD_PASSWORD");
    }

    #[actix_web::test]
    async fn test_change_password_weak_is_400() {
        let mut change = MockChangePasswordUseCase::new();
        change
            .expect_change_password()
            .returning(|_| Err(ChangePasswordError::WeakPassword));

        let app_state = TestAppStateBuilder::default()
            .with_change_password(change)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(3, "ops"))
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/auth/change-password")
            .insert_header(("Authorization", "Bearer valid.jwt"))
            .set_json(serde_json::json!({"old_password": "oldpass", "new_password": "abc"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "WEAK_PASSWORD");
    }

    #[actix_web::test]
    async fn test_change_password_without_token_is_401() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(static_token_provider(3, "ops"))
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/auth/change-password")
            .set_json(body_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
