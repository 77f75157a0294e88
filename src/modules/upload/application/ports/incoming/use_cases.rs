use async_trait::async_trait;

use crate::upload::application::domain::entities::{UploadKind, UploadedFile};

#[derive(Debug, Clone)]
pub struct UploadCommand {
    pub kind: UploadKind,
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    #[error("No file provided")]
    EmptyFile,

    #[error("File exceeds the {0} byte limit")]
    TooLarge(usize),

    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadFileUseCase: Send + Sync {
    async fn upload(&self, command: UploadCommand) -> Result<UploadedFile, UploadError>;
}
