pub mod qr_code_service;
pub mod token_cache;

pub use qr_code_service::QrCodeService;
pub use token_cache::WechatTokenCache;
