pub mod create_recommendor;
pub mod delete_recommendor;
pub mod get_recommendor;
pub mod list_recommendors;
pub mod regenerate_qrcodes;
pub mod update_recommendor;

pub use create_recommendor::create_recommendor_handler;
pub use delete_recommendor::delete_recommendor_handler;
pub use get_recommendor::{admin_get_recommendor_handler, get_recommendor_handler};
pub use list_recommendors::{admin_list_recommendors_handler, list_recommendors_handler};
pub use regenerate_qrcodes::regenerate_qrcodes_handler;
pub use update_recommendor::update_recommendor_handler;
