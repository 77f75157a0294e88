use std::sync::Arc;

use async_trait::async_trait;

use crate::destination::application::domain::entities::{
    Destination, DESTINATION_STATUS_ACTIVE,
};
use crate::destination::application::ports::incoming::use_cases::{
    CreateDestinationCommand, CreateDestinationUseCase, DeleteDestinationUseCase,
    DestinationError, DestinationListQuery, GetDestinationUseCase,
    ListDestinationsByRecommendorUseCase, ListDestinationsUseCase, UpdateDestinationCommand,
    UpdateDestinationUseCase,
};
use crate::destination::application::ports::outgoing::destination_repository::{
    DestinationChanges, DestinationFilter, DestinationRepository, DestinationRepositoryError,
    NewDestination,
};
use crate::recommendor::application::ports::incoming::use_cases::ListVisibility;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct DestinationService {
    repository: Arc<dyn DestinationRepository>,
}

impl DestinationService {
    pub fn new(repository: Arc<dyn DestinationRepository>) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: DestinationRepositoryError) -> DestinationError {
    match e {
        DestinationRepositoryError::NotFound => DestinationError::NotFound,
        DestinationRepositoryError::Database(msg) => DestinationError::RepositoryError(msg),
    }
}

fn validate_rating(rating: f64) -> Result<(), DestinationError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(DestinationError::Validation(
            "Rating must be between 0 and 5".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl CreateDestinationUseCase for DestinationService {
    async fn create(
        &self,
        command: CreateDestinationCommand,
    ) -> Result<Destination, DestinationError> {
        if command.name.trim().is_empty() {
            return Err(DestinationError::Validation("name is required".to_string()));
        }
        if command.category.trim().is_empty() {
            return Err(DestinationError::Validation(
                "category is required".to_string(),
            ));
        }

        if !self
            .repository
            .recommendor_exists(command.recommendor_id)
            .await
            .map_err(map_repo_error)?
        {
            return Err(DestinationError::RecommendorNotFound);
        }

        let status = if command.status.is_empty() {
            DESTINATION_STATUS_ACTIVE.to_string()
        } else {
            command.status
        };

        self.repository
            .insert(NewDestination {
                recommendor_id: command.recommendor_id,
                name: command.name,
                description: command.description,
                image: command.image,
                address: command.address,
                category: command.category,
                status,
            })
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl ListDestinationsUseCase for DestinationService {
    async fn list(
        &self,
        query: DestinationListQuery,
    ) -> Result<PageResult<Destination>, DestinationError> {
        let status = match (query.visibility, query.status) {
            (ListVisibility::Public, None) => Some(DESTINATION_STATUS_ACTIVE.to_string()),
            (_, status) => status,
        };

        let filter = DestinationFilter {
            recommendor_id: query.recommendor_id,
            name: query.name,
            category: query.category,
            status,
        };

        let (destinations, total) = self
            .repository
            .list(filter, &query.page)
            .await
            .map_err(map_repo_error)?;

        Ok(PageResult::new(destinations, total, &query.page))
    }
}

#[async_trait]
impl GetDestinationUseCase for DestinationService {
    async fn get(&self, id: i32) -> Result<Destination, DestinationError> {
        self.repository
            .find_with_recommendor(id)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl UpdateDestinationUseCase for DestinationService {
    async fn update(
        &self,
        id: i32,
        command: UpdateDestinationCommand,
    ) -> Result<Destination, DestinationError> {
        if let Some(rating) = command.rating {
            validate_rating(rating)?;
        }
        if let Some(name) = &command.name {
            if name.trim().is_empty() {
                return Err(DestinationError::Validation(
                    "name cannot be empty".to_string(),
                ));
            }
        }

        self.repository
            .update(
                id,
                DestinationChanges {
                    name: command.name,
                    description: command.description,
                    image: command.image,
                    address: command.address,
                    category: command.category,
                    rating: command.rating,
                    status: command.status,
                },
            )
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl DeleteDestinationUseCase for DestinationService {
    async fn delete(&self, id: i32) -> Result<(), DestinationError> {
        self.repository.find_by_id(id).await.map_err(map_repo_error)?;
        self.repository.soft_delete(id).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl ListDestinationsByRecommendorUseCase for DestinationService {
    async fn list_for_recommendor(
        &self,
        recommendor_id: i32,
        visibility: ListVisibility,
        page: PageRequest,
    ) -> Result<PageResult<Destination>, DestinationError> {
        if !self
            .repository
            .recommendor_exists(recommendor_id)
            .await
            .map_err(map_repo_error)?
        {
            return Err(DestinationError::RecommendorNotFound);
        }

        let mut query = DestinationListQuery::new(visibility);
        query.page = page;
        query.recommendor_id = Some(recommendor_id);
        self.list(query).await
    }
}
