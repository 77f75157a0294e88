use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use futures::StreamExt;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::upload::application::domain::entities::UploadKind;
use crate::upload::application::ports::incoming::use_cases::{UploadCommand, UploadError};
use crate::AppState;

struct IncomingFile {
    file_name: String,
    content_type: String,
    data: Vec<u8>,
}

enum FilePart {
    Missing,
    TooLarge,
    File(IncomingFile),
}

/// Pulls the `file` part out of the multipart body. Reading stops as soon as
/// the running byte count passes `max_size`, so an oversized body is never
/// buffered in full.
async fn read_file_part(
    mut payload: Multipart,
    max_size: usize,
) -> Result<FilePart, actix_web::Error> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload.bin")
            .to_string();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if data.len() + chunk.len() > max_size {
                return Ok(FilePart::TooLarge);
            }
            data.extend_from_slice(&chunk);
        }

        return Ok(FilePart::File(IncomingFile {
            file_name,
            content_type,
            data,
        }));
    }

    Ok(FilePart::Missing)
}

async fn handle_upload(
    kind: UploadKind,
    payload: Multipart,
    data: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let file = match read_file_part(payload, kind.max_size()).await? {
        FilePart::Missing => {
            return Ok(ApiResponse::bad_request("NO_FILE", "No file provided"));
        }
        FilePart::TooLarge => {
            return Ok(ApiResponse::bad_request(
                "FILE_TOO_LARGE",
                &UploadError::TooLarge(kind.max_size()).to_string(),
            ));
        }
        FilePart::File(file) => file,
    };

    let command = UploadCommand {
        kind,
        file_name: file.file_name,
        content_type: file.content_type,
        data: file.data,
    };

    let response = match data.uploads.upload(command).await {
        Ok(uploaded) => ApiResponse::success(uploaded),

        Err(UploadError::EmptyFile) => ApiResponse::bad_request("NO_FILE", "No file provided"),

        Err(e @ UploadError::TooLarge(_)) => {
            ApiResponse::bad_request("FILE_TOO_LARGE", &e.to_string())
        }

        Err(e @ UploadError::UnsupportedType(_)) => {
            ApiResponse::bad_request("UNSUPPORTED_FILE_TYPE", &e.to_string())
        }

        Err(e) => {
            error!(error = %e, "file upload failed");
            ApiResponse::internal_error()
        }
    };

    Ok(response)
}

#[post("/upload/avatar")]
pub async fn upload_avatar_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    handle_upload(UploadKind::Avatar, payload, data).await
}

#[post("/upload/image")]
pub async fn upload_image_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    handle_upload(UploadKind::Image, payload, data).await
}

#[post("/upload/document")]
pub async fn upload_document_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    handle_upload(UploadKind::Document, payload, data).await
}
