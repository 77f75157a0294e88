pub mod destination_service;

pub use destination_service::DestinationService;
