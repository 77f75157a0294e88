use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recommendor::application::domain::entities::Recommendor;

pub const DESTINATION_STATUS_ACTIVE: &str = "active";

/// A place endorsed by a recommendor. `image` carries the upload URLs as a
/// serialized list; the backend treats it as opaque text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i32,
    pub recommendor_id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub address: String,
    pub category: String,
    pub rating: f64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recommendor: Option<Box<Recommendor>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
