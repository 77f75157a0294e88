use async_trait::async_trait;
use serde::Deserialize;

use crate::destination::application::domain::entities::Destination;
use crate::recommendor::application::ports::incoming::use_cases::ListVisibility;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDestinationCommand {
    pub recommendor_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub address: String,
    pub category: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDestinationCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DestinationListQuery {
    pub page: PageRequest,
    pub visibility: ListVisibility,
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub recommendor_id: Option<i32>,
}

impl DestinationListQuery {
    pub fn new(visibility: ListVisibility) -> Self {
        Self {
            page: PageRequest::default(),
            visibility,
            name: None,
            category: None,
            status: None,
            recommendor_id: None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DestinationError {
    #[error("Destination not found")]
    NotFound,

    #[error("Recommendor not found")]
    RecommendorNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateDestinationUseCase: Send + Sync {
    async fn create(
        &self,
        command: CreateDestinationCommand,
    ) -> Result<Destination, DestinationError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListDestinationsUseCase: Send + Sync {
    async fn list(
        &self,
        query: DestinationListQuery,
    ) -> Result<PageResult<Destination>, DestinationError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetDestinationUseCase: Send + Sync {
    async fn get(&self, id: i32) -> Result<Destination, DestinationError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateDestinationUseCase: Send + Sync {
    async fn update(
        &self,
        id: i32,
        command: UpdateDestinationCommand,
    ) -> Result<Destination, DestinationError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeleteDestinationUseCase: Send + Sync {
    async fn delete(&self, id: i32) -> Result<(), DestinationError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListDestinationsByRecommendorUseCase: Send + Sync {
    async fn list_for_recommendor(
        &self,
        recommendor_id: i32,
        visibility: ListVisibility,
        page: PageRequest,
    ) -> Result<PageResult<Destination>, DestinationError>;
}
