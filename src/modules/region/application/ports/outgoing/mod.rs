pub mod region_repository;
