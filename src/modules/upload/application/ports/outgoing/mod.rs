pub mod file_storage;
