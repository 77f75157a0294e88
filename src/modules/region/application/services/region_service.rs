use std::sync::Arc;

use async_trait::async_trait;

use crate::region::application::domain::entities::Region;
use crate::region::application::ports::incoming::use_cases::{
    CreateRegionCommand, CreateRegionUseCase, DeleteRegionUseCase, GetRegionUseCase,
    ListRegionsUseCase, RegionError, RegionListQuery, UpdateRegionCommand, UpdateRegionUseCase,
};
use crate::region::application::ports::outgoing::region_repository::{
    NewRegion, RegionChanges, RegionFilter, RegionRepository, RegionRepositoryError,
};
use crate::shared::pagination::PageResult;

/// One service carries all five region operations; they share nothing but
/// the repository.
pub struct RegionService {
    repository: Arc<dyn RegionRepository>,
}

impl RegionService {
    pub fn new(repository: Arc<dyn RegionRepository>) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: RegionRepositoryError) -> RegionError {
    match e {
        RegionRepositoryError::NotFound => RegionError::NotFound,
        RegionRepositoryError::DuplicateName => RegionError::DuplicateName,
        RegionRepositoryError::Database(msg) => RegionError::RepositoryError(msg),
    }
}

#[async_trait]
impl CreateRegionUseCase for RegionService {
    async fn create(&self, command: CreateRegionCommand) -> Result<Region, RegionError> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(RegionError::NameRequired);
        }

        self.repository
            .insert(NewRegion {
                name,
                description: command.description,
            })
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl ListRegionsUseCase for RegionService {
    async fn list(&self, query: RegionListQuery) -> Result<PageResult<Region>, RegionError> {
        let filter = RegionFilter { name: query.name };
        let (regions, total) = self
            .repository
            .list(filter, &query.page)
            .await
            .map_err(map_repo_error)?;

        Ok(PageResult::new(regions, total, &query.page))
    }
}

#[async_trait]
impl GetRegionUseCase for RegionService {
    async fn get(&self, id: i32) -> Result<Region, RegionError> {
        self.repository.find_by_id(id).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl UpdateRegionUseCase for RegionService {
    async fn update(&self, id: i32, command: UpdateRegionCommand) -> Result<Region, RegionError> {
        if let Some(name) = &command.name {
            if name.trim().is_empty() {
                return Err(RegionError::NameRequired);
            }
        }

        self.repository
            .update(
                id,
                RegionChanges {
                    name: command.name,
                    description: command.description,
                },
            )
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl DeleteRegionUseCase for RegionService {
    async fn delete(&self, id: i32) -> Result<(), RegionError> {
        // Confirm the region exists before the in-use check so a missing id
        // answers 404, not 400.
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?;

        let references = self
            .repository
            .recommendor_reference_count(id)
            .await
            .map_err(map_repo_error)?;
        if references > 0 {
            return Err(RegionError::InUse);
        }

        self.repository.soft_delete(id).await.map_err(map_repo_error)
    }
}
