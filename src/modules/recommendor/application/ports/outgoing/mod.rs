pub mod qr_generator;
pub mod recommendor_repository;
