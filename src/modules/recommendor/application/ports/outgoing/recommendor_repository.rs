use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::recommendor::application::domain::entities::{Gender, Recommendor};
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone)]
pub struct NewRecommendor {
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    pub id_number: String,
    pub avatar: String,
    pub bio: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub phone: String,
    pub email: String,
    pub province_code: String,
    pub city_code: String,
    pub district_code: String,
    pub region_address: String,
    pub status: String,
}

/// Only present fields overwrite; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct RecommendorChanges {
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

#[derive(Debug, Clone, Default)]
pub struct RecommendorFilter {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    pub district_code: Option<String>,
    /// Fuzzy matches against the composed region_address.
    pub region_terms: Vec<String>,
    pub status: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendorRepositoryError {
    #[error("Recommendor not found")]
    NotFound,

    #[error("ID number already exists")]
    DuplicateIdNumber,

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendorRepository: Send + Sync {
    async fn insert(
        &self,
        recommendor: NewRecommendor,
    ) -> Result<Recommendor, RecommendorRepositoryError>;

    async fn list(
        &self,
        filter: RecommendorFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Recommendor>, u64), RecommendorRepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Recommendor, RecommendorRepositoryError>;

    /// Like `find_by_id` but with the recommendor's live destinations attached.
    async fn find_with_destinations(
        &self,
        id: i32,
    ) -> Result<Recommendor, RecommendorRepositoryError>;

    async fn id_number_exists(
        &self,
        id_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RecommendorRepositoryError>;

    async fn update(
        &self,
        id: i32,
        changes: RecommendorChanges,
    ) -> Result<Recommendor, RecommendorRepositoryError>;

    async fn save_qr_codes(
        &self,
        id: i32,
        web: String,
        wxapp: String,
    ) -> Result<Recommendor, RecommendorRepositoryError>;

    async fn soft_delete(&self, id: i32) -> Result<(), RecommendorRepositoryError>;

    /// Removes the row entirely. Only used to undo an insert whose QR
    /// generation failed.
    async fn hard_delete(&self, id: i32) -> Result<(), RecommendorRepositoryError>;
}
