use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::recommendor::application::domain::entities::{
    Recommendor, RECOMMENDOR_STATUS_ACTIVE,
};
use crate::recommendor::application::ports::incoming::use_cases::{
    CreateRecommendorCommand, CreateRecommendorUseCase, DeleteRecommendorUseCase,
    GetRecommendorUseCase, ListRecommendorsUseCase, ListVisibility, RecommendorError,
    RecommendorListQuery, RegenerateQrCodesUseCase, UpdateRecommendorCommand,
    UpdateRecommendorUseCase,
};
use crate::recommendor::application::ports::outgoing::qr_generator::QrCodeGenerator;
use crate::recommendor::application::ports::outgoing::recommendor_repository::{
    NewRecommendor, RecommendorChanges, RecommendorFilter, RecommendorRepository,
    RecommendorRepositoryError,
};
use crate::shared::pagination::PageResult;

const MIN_AGE: i32 = 18;
const MAX_AGE: i32 = 100;

pub struct RecommendorService {
    repository: Arc<dyn RecommendorRepository>,
    qr_generator: Arc<dyn QrCodeGenerator>,
}

impl RecommendorService {
    pub fn new(
        repository: Arc<dyn RecommendorRepository>,
        qr_generator: Arc<dyn QrCodeGenerator>,
    ) -> Self {
        Self {
            repository,
            qr_generator,
        }
    }
}

fn map_repo_error(e: RecommendorRepositoryError) -> RecommendorError {
    match e {
        RecommendorRepositoryError::NotFound => RecommendorError::NotFound,
        RecommendorRepositoryError::DuplicateIdNumber => RecommendorError::DuplicateIdNumber,
        RecommendorRepositoryError::Database(msg) => RecommendorError::RepositoryError(msg),
    }
}

fn validate_age(age: i32) -> Result<(), RecommendorError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(RecommendorError::Validation(format!(
            "Age must be between {} and {}",
            MIN_AGE, MAX_AGE
        )));
    }
    Ok(())
}

fn require(value: &str, field: &str) -> Result<(), RecommendorError> {
    if value.trim().is_empty() {
        return Err(RecommendorError::Validation(format!(
            "{} is required",
            field
        )));
    }
    Ok(())
}

#[async_trait]
impl CreateRecommendorUseCase for RecommendorService {
    async fn create(
        &self,
        command: CreateRecommendorCommand,
    ) -> Result<Recommendor, RecommendorError> {
        require(&command.name, "name")?;
        require(&command.id_number, "id_number")?;
        require(&command.province_code, "province_code")?;
        require(&command.city_code, "city_code")?;
        require(&command.district_code, "district_code")?;
        validate_age(command.age)?;
        if command.valid_until <= command.valid_from {
            return Err(RecommendorError::Validation(
                "valid_until must be after valid_from".to_string(),
            ));
        }

        if self
            .repository
            .id_number_exists(&command.id_number, None)
            .await
            .map_err(map_repo_error)?
        {
            return Err(RecommendorError::DuplicateIdNumber);
        }

        let status = if command.status.is_empty() {
            RECOMMENDOR_STATUS_ACTIVE.to_string()
        } else {
            command.status
        };
        let region_address = if command.region_address.is_empty() {
            format!(
                "{}/{}/{}",
                command.province_code, command.city_code, command.district_code
            )
        } else {
            command.region_address
        };

        let inserted = self
            .repository
            .insert(NewRecommendor {
                name: command.name,
                gender: command.gender,
                age: command.age,
                id_number: command.id_number,
                avatar: command.avatar,
                bio: command.bio,
                valid_from: command.valid_from,
                valid_until: command.valid_until,
                phone: command.phone,
                email: command.email,
                province_code: command.province_code,
                city_code: command.city_code,
                district_code: command.district_code,
                region_address,
                status,
            })
            .await
            .map_err(map_repo_error)?;

        // A row without its QR payloads is useless to the frontend, so a QR
        // failure undoes the insert instead of leaving a half-created row.
        let pair = match self.qr_generator.generate_for_recommendor(inserted.id).await {
            Ok(pair) => pair,
            Err(e) => {
                error!(recommendor_id = inserted.id, error = %e, "QR generation failed, undoing insert");
                if let Err(cleanup) = self.repository.hard_delete(inserted.id).await {
                    warn!(recommendor_id = inserted.id, error = %cleanup, "failed to undo insert");
                }
                return Err(RecommendorError::QrGeneration(e.to_string()));
            }
        };

        self.repository
            .save_qr_codes(inserted.id, pair.web, pair.wxapp)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl ListRecommendorsUseCase for RecommendorService {
    async fn list(
        &self,
        query: RecommendorListQuery,
    ) -> Result<PageResult<Recommendor>, RecommendorError> {
        let status = match (query.visibility, query.status) {
            (ListVisibility::Public, None) => Some(RECOMMENDOR_STATUS_ACTIVE.to_string()),
            (_, status) => status,
        };

        let filter = RecommendorFilter {
            name: query.name,
            gender: query.gender,
            province_code: query.province_code,
            city_code: query.city_code,
            district_code: query.district_code,
            region_terms: query.region_terms,
            status,
            min_age: query.min_age,
            max_age: query.max_age,
        };

        let (recommendors, total) = self
            .repository
            .list(filter, &query.page)
            .await
            .map_err(map_repo_error)?;

        Ok(PageResult::new(recommendors, total, &query.page))
    }
}

#[async_trait]
impl GetRecommendorUseCase for RecommendorService {
    async fn get(&self, id: i32) -> Result<Recommendor, RecommendorError> {
        self.repository
            .find_with_destinations(id)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl UpdateRecommendorUseCase for RecommendorService {
    async fn update(
        &self,
        id: i32,
        command: UpdateRecommendorCommand,
    ) -> Result<Recommendor, RecommendorError> {
        if let Some(age) = command.age {
            validate_age(age)?;
        }
        if let Some(rating) = command.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(RecommendorError::Validation(
                    "Rating must be between 0 and 5".to_string(),
                ));
            }
        }

        self.repository.find_by_id(id).await.map_err(map_repo_error)?;

        if let Some(id_number) = &command.id_number {
            if self
                .repository
                .id_number_exists(id_number, Some(id))
                .await
                .map_err(map_repo_error)?
            {
                return Err(RecommendorError::DuplicateIdNumber);
            }
        }

        self.repository
            .update(
                id,
                RecommendorChanges {
                    name: command.name,
                    gender: command.gender,
                    age: command.age,
                    id_number: command.id_number,
                    avatar: command.avatar,
                    bio: command.bio,
                    valid_from: command.valid_from,
                    valid_until: command.valid_until,
                    phone: command.phone,
                    email: command.email,
                    province_code: command.province_code,
                    city_code: command.city_code,
                    district_code: command.district_code,
                    region_address: command.region_address,
                    status: command.status,
                    rating: command.rating,
                },
            )
            .await
            .map_err(map_repo_error)?;

        // QR payloads follow the row so stale codes never outlive an edit.
        self.regenerate(id).await
    }
}

#[async_trait]
impl DeleteRecommendorUseCase for RecommendorService {
    async fn delete(&self, id: i32) -> Result<(), RecommendorError> {
        self.repository.find_by_id(id).await.map_err(map_repo_error)?;
        self.repository.soft_delete(id).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl RegenerateQrCodesUseCase for RecommendorService {
    async fn regenerate(&self, id: i32) -> Result<Recommendor, RecommendorError> {
        self.repository.find_by_id(id).await.map_err(map_repo_error)?;

        let pair = self
            .qr_generator
            .generate_for_recommendor(id)
            .await
            .map_err(|e| RecommendorError::QrGeneration(e.to_string()))?;

        self.repository
            .save_qr_codes(id, pair.web, pair.wxapp)
            .await
            .map_err(map_repo_error)
    }
}
