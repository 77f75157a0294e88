pub mod domain;
pub mod ports;
pub mod recommendor_use_cases;
pub mod services;
