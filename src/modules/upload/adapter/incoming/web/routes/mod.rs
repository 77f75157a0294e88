pub mod upload_file;

pub use upload_file::{upload_avatar_handler, upload_document_handler, upload_image_handler};
