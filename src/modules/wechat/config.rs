use tracing::warn;

/// Settings for QR code targets and the WeChat Mini Program platform.
#[derive(Clone, Debug)]
pub struct WechatConfig {
    /// Public base URL encoded into web QR codes.
    pub base_url: String,
    pub app_id: String,
    /// Base path prepended to Mini Program page routes.
    pub app_path: String,
    /// Without a secret, Mini Program codes fall back to locally rendered
    /// QR images pointing at the WeChat connect page.
    pub app_secret: Option<String>,
}

impl WechatConfig {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let app_id =
            std::env::var("WX_APP_ID").unwrap_or_else(|_| "your_miniprogram_appid".to_string());
        let app_path = std::env::var("WX_APP_PATH").unwrap_or_else(|_| "/".to_string());
        let app_secret = std::env::var("WX_APP_SECRET").ok().filter(|s| !s.is_empty());

        if app_secret.is_none() {
            warn!("WX_APP_SECRET not set, Mini Program QR codes will use the local fallback");
        }

        Self {
            base_url,
            app_id,
            app_path,
            app_secret,
        }
    }
}
