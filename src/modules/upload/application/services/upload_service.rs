use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::upload::application::domain::entities::UploadedFile;
use crate::upload::application::ports::incoming::use_cases::{
    UploadCommand, UploadError, UploadFileUseCase,
};
use crate::upload::application::ports::outgoing::file_storage::FileStorage;

pub struct UploadService {
    storage: Arc<dyn FileStorage>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self { storage }
    }

    /// Timestamps the original name so repeated uploads never collide.
    fn unique_name(original: &str) -> String {
        let path = Path::new(original);
        let stem: String = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("file")
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_default();

        format!("{}_{}{}", stem, Utc::now().format("%Y%m%d_%H%M%S"), extension)
    }
}

#[async_trait]
impl UploadFileUseCase for UploadService {
    async fn upload(&self, command: UploadCommand) -> Result<UploadedFile, UploadError> {
        if command.data.is_empty() {
            return Err(UploadError::EmptyFile);
        }
        if command.data.len() > command.kind.max_size() {
            return Err(UploadError::TooLarge(command.kind.max_size()));
        }
        if !command.kind.accepts(&command.content_type) {
            return Err(UploadError::UnsupportedType(command.content_type));
        }

        let file_name = Self::unique_name(&command.file_name);
        let directory = command.kind.directory();

        self.storage
            .save(directory, &file_name, &command.data)
            .await
            .map_err(|e| UploadError::Storage(e.to_string()))?;

        info!(directory, file_name, size = command.data.len(), "file uploaded");

        Ok(UploadedFile {
            url: format!("/uploads/{}/{}", directory, file_name),
            file_name,
            size: command.data.len(),
            content_type: command.content_type,
        })
    }
}
