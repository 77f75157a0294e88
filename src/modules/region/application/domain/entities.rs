use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named administrative area a recommendor can be grouped under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
