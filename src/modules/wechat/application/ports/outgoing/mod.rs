pub mod clock;
pub mod wechat_api;
