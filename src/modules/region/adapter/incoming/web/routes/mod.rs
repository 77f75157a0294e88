pub mod create_region;
pub mod delete_region;
pub mod get_region;
pub mod list_regions;
pub mod update_region;

pub use create_region::create_region_handler;
pub use delete_region::delete_region_handler;
pub use get_region::get_region_handler;
pub use list_regions::list_regions_handler;
pub use update_region::update_region_handler;
