use async_trait::async_trait;

/// Both QR payloads for one recommendor, as data URLs or remote image data.
#[derive(Debug, Clone, PartialEq)]
pub struct QrCodePair {
    pub web: String,
    pub wxapp: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum QrGenerateError {
    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("WeChat platform error: {0}")]
    Platform(String),

    #[error("WeChat request failed: {0}")]
    Transport(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrCodeGenerator: Send + Sync {
    async fn generate_for_recommendor(&self, id: i32) -> Result<QrCodePair, QrGenerateError>;
}
