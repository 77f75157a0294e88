pub mod auth;
pub mod destination;
pub mod recommendor;
pub mod region;
pub mod upload;
pub mod wechat;
