pub mod recommendors;
