pub mod create_destination;
pub mod delete_destination;
pub mod get_destination;
pub mod list_by_recommendor;
pub mod list_destinations;
pub mod update_destination;

pub use create_destination::create_destination_handler;
pub use delete_destination::delete_destination_handler;
pub use get_destination::{admin_get_destination_handler, get_destination_handler};
pub use list_by_recommendor::{
    admin_list_recommendor_destinations_handler, list_recommendor_destinations_handler,
};
pub use list_destinations::{admin_list_destinations_handler, list_destinations_handler};
pub use update_destination::update_destination_handler;
