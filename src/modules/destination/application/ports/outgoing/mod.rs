pub mod destination_repository;
