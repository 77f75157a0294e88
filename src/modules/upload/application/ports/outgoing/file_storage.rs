use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to write file: {0}")]
    WriteFailed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persists `data` as `file_name` under `directory`, creating the
    /// directory if needed.
    async fn save(
        &self,
        directory: &str,
        file_name: &str,
        data: &[u8],
    ) -> Result<(), StorageError>;
}
