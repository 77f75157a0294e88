pub mod change_password;
pub mod current_admin;
pub mod login;
pub mod logout;
pub mod refresh_token;

pub use change_password::change_password_handler;
pub use current_admin::current_admin_handler;
pub use login::login_handler;
pub use logout::logout_handler;
pub use refresh_token::refresh_token_handler;
