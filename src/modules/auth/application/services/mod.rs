pub mod change_password_service;
pub mod current_admin_service;
pub mod login_service;
pub mod refresh_token_service;

pub use change_password_service::ChangePasswordService;
pub use current_admin_service::CurrentAdminService;
pub use login_service::LoginService;
pub use refresh_token_service::RefreshTokenService;
