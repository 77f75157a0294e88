use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    /// Lifetime in seconds as reported by the platform.
    pub expires_in: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum WechatApiError {
    #[error("WeChat API error [{errcode}]: {errmsg}")]
    Platform { errcode: i64, errmsg: String },

    #[error("WeChat request failed: {0}")]
    Transport(String),

    #[error("Unexpected WeChat response: {0}")]
    Malformed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WechatApi: Send + Sync {
    async fn fetch_access_token(
        &self,
        app_id: &str,
        secret: &str,
    ) -> Result<AccessToken, WechatApiError>;

    /// Requests an unlimited Mini Program code image for the given page and
    /// scene payload. Returns raw image bytes.
    async fn fetch_wxa_code(
        &self,
        access_token: &str,
        page: &str,
        scene: &str,
    ) -> Result<Vec<u8>, WechatApiError>;
}
