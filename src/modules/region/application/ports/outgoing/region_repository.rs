use async_trait::async_trait;

use crate::region::application::domain::entities::Region;
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone)]
pub struct NewRegion {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegionChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RegionFilter {
    pub name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegionRepositoryError {
    #[error("Region not found")]
    NotFound,

    #[error("Region name already exists")]
    DuplicateName,

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn insert(&self, region: NewRegion) -> Result<Region, RegionRepositoryError>;

    async fn list(
        &self,
        filter: RegionFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Region>, u64), RegionRepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Region, RegionRepositoryError>;

    async fn update(&self, id: i32, changes: RegionChanges)
        -> Result<Region, RegionRepositoryError>;

    async fn soft_delete(&self, id: i32) -> Result<(), RegionRepositoryError>;

    /// Non-deleted recommendors still pointing at this region through the
    /// legacy region_id column.
    async fn recommendor_reference_count(&self, id: i32) -> Result<u64, RegionRepositoryError>;
}
