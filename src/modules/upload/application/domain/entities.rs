use serde::Serialize;

const MEGABYTE: usize = 1024 * 1024;

/// Upload categories with their size caps and accepted content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Avatar,
    Image,
    Document,
}

impl UploadKind {
    pub fn max_size(&self) -> usize {
        match self {
            UploadKind::Avatar => 2 * MEGABYTE,
            UploadKind::Image | UploadKind::Document => 10 * MEGABYTE,
        }
    }

    pub fn directory(&self) -> &'static str {
        match self {
            UploadKind::Avatar => "avatars",
            UploadKind::Image => "images",
            UploadKind::Document => "documents",
        }
    }

    pub fn accepts(&self, content_type: &str) -> bool {
        match self {
            UploadKind::Avatar | UploadKind::Image => content_type.starts_with("image/"),
            UploadKind::Document => matches!(
                content_type,
                "application/pdf"
                    | "application/msword"
                    | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    | "application/vnd.ms-excel"
                    | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                    | "application/vnd.ms-powerpoint"
                    | "application/vnd.openxmlformats-officedocument.presentationml.presentation"
                    | "text/plain"
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadedFile {
    pub file_name: String,
    pub url: String,
    pub size: usize,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_caps() {
        assert_eq!(UploadKind::Avatar.max_size(), 2 * MEGABYTE);
        assert_eq!(UploadKind::Document.max_size(), 10 * MEGABYTE);
    }

    #[test]
    fn test_accepted_content_types() {
        assert!(UploadKind::Avatar.accepts("image/png"));
        assert!(!UploadKind::Avatar.accepts("application/pdf"));
        assert!(UploadKind::Document.accepts("application/pdf"));
        assert!(UploadKind::Document.accepts("text/plain"));
        assert!(!UploadKind::Document.accepts("image/png"));
    }
}
