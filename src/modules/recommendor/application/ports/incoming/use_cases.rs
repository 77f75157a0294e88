use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::recommendor::application::domain::entities::{Gender, Recommendor};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecommendorCommand {
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    pub id_number: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub province_code: String,
    pub city_code: String,
    pub district_code: String,
    #[serde(default)]
    pub region_address: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecommendorCommand {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<i32>,
    pub id_number: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    pub district_code: Option<String>,
    pub region_address: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f64>,
}

/// Admin listings see every status; public listings default to active
/// unless the caller filters by status explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVisibility {
    Public,
    Admin,
}

#[derive(Debug, Clone)]
pub struct RecommendorListQuery {
    pub page: PageRequest,
    pub visibility: ListVisibility,
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    pub district_code: Option<String>,
    pub region_terms: Vec<String>,
    pub status: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

impl RecommendorListQuery {
    pub fn new(visibility: ListVisibility) -> Self {
        Self {
            page: PageRequest::default(),
            visibility,
            name: None,
            gender: None,
            province_code: None,
            city_code: None,
            district_code: None,
            region_terms: vec![],
            status: None,
            min_age: None,
            max_age: None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendorError {
    #[error("Recommendor not found")]
    NotFound,

    #[error("ID number already exists")]
    DuplicateIdNumber,

    #[error("{0}")]
    Validation(String),

    #[error("QR code generation failed: {0}")]
    QrGeneration(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateRecommendorUseCase: Send + Sync {
    async fn create(
        &self,
        command: CreateRecommendorCommand,
    ) -> Result<Recommendor, RecommendorError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListRecommendorsUseCase: Send + Sync {
    async fn list(
        &self,
        query: RecommendorListQuery,
    ) -> Result<PageResult<Recommendor>, RecommendorError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetRecommendorUseCase: Send + Sync {
    async fn get(&self, id: i32) -> Result<Recommendor, RecommendorError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpdateRecommendorUseCase: Send + Sync {
    async fn update(
        &self,
        id: i32,
        command: UpdateRecommendorCommand,
    ) -> Result<Recommendor, RecommendorError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeleteRecommendorUseCase: Send + Sync {
    async fn delete(&self, id: i32) -> Result<(), RecommendorError>;
}

/// Idempotent repair step for rows whose QR payloads are missing or stale.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegenerateQrCodesUseCase: Send + Sync {
    async fn regenerate(&self, id: i32) -> Result<Recommendor, RecommendorError>;
}
