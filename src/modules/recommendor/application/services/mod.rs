pub mod recommendor_service;

pub use recommendor_service::RecommendorService;
