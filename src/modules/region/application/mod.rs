pub mod domain;
pub mod ports;
pub mod region_use_cases;
pub mod services;
