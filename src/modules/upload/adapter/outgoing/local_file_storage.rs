use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

use crate::upload::application::ports::outgoing::file_storage::{FileStorage, StorageError};

/// Writes uploads under a local root directory, served back via actix-files.
#[derive(Clone, Debug)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save(
        &self,
        directory: &str,
        file_name: &str,
        data: &[u8],
    ) -> Result<(), StorageError> {
        let dir = self.root.join(directory);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        let path = dir.join(file_name);
        if let Err(e) = tokio::fs::write(&path, data).await {
            // A partial file would be served as a broken download.
            if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                warn!(path = %path.display(), error = %cleanup, "failed to remove partial file");
            }
            return Err(StorageError::WriteFailed(e.to_string()));
        }

        Ok(())
    }
}
