use async_trait::async_trait;

use crate::destination::application::domain::entities::Destination;
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone)]
pub struct NewDestination {
    pub recommendor_id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub address: String,
    pub category: String,
    pub status: String,
}

/// Only present fields overwrite; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct DestinationChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DestinationFilter {
    pub recommendor_id: Option<i32>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DestinationRepositoryError {
    #[error("Destination not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    async fn insert(
        &self,
        destination: NewDestination,
    ) -> Result<Destination, DestinationRepositoryError>;

    async fn list(
        &self,
        filter: DestinationFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Destination>, u64), DestinationRepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Destination, DestinationRepositoryError>;

    /// Like `find_by_id` but with the owning recommendor attached.
    async fn find_with_recommendor(
        &self,
        id: i32,
    ) -> Result<Destination, DestinationRepositoryError>;

    /// Whether a live recommendor row exists for the given id.
    async fn recommendor_exists(&self, id: i32) -> Result<bool, DestinationRepositoryError>;

    async fn update(
        &self,
        id: i32,
        changes: DestinationChanges,
    ) -> Result<Destination, DestinationRepositoryError>;

    async fn soft_delete(&self, id: i32) -> Result<(), DestinationRepositoryError>;
}
