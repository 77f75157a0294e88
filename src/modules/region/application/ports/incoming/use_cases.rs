use async_trait::async_trait;
use serde::Deserialize;

use crate::region::application::domain::entities::Region;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegionCommand {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRegionCommand {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RegionListQuery {
    pub page: PageRequest,
    pub name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegionError {
    #[error("Region not found")]
    NotFound,

    #[error("Region name already exists")]
    DuplicateName,

    #[error("Region name is required")]
    NameRequired,

    #[error("Region is in use by recommendors")]
    InUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateRegionUseCase: Send + Sync {
    async fn create(&self, command: CreateRegionCommand) -> Result<Region, RegionError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListRegionsUseCase: Send + Sync {
    async fn list(&self, query: RegionListQuery) -> Result<PageResult<Region>, RegionError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetRegionUseCase: Send + Sync {
    async fn get(&self, id: i32) -> Result<Region, RegionError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateRegionUseCase: Send + Sync {
    async fn update(&self, id: i32, command: UpdateRegionCommand) -> Result<Region, RegionError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeleteRegionUseCase: Send + Sync {
    async fn delete(&self, id: i32) -> Result<(), RegionError>;
}
