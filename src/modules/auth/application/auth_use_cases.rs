use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, GetCurrentAdminUseCase, LoginUseCase, RefreshTokenUseCase,
};

/// Auth use cases bundled for `AppState`.
#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUseCase>,
    pub refresh_token: Arc<dyn RefreshTokenUseCase>,
    pub current_admin: Arc<dyn GetCurrentAdminUseCase>,
    pub change_password: Arc<dyn ChangePasswordUseCase>,
}
