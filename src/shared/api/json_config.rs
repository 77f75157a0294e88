use actix_web::web::JsonConfig;

use crate::shared::api::ApiResponse;

/// Malformed request bodies come back as a 400 in the standard envelope,
/// with the raw deserialization detail in the message.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
