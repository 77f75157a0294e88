use std::sync::Arc;

use crate::recommendor::application::ports::incoming::use_cases::{
    CreateRecommendorUseCase, DeleteRecommendorUseCase, GetRecommendorUseCase,
    ListRecommendorsUseCase, RegenerateQrCodesUseCase, UpdateRecommendorUseCase,
};

/// Recommendor use cases bundled for `AppState`.
#[derive(Clone)]
pub struct RecommendorUseCases {
    pub create: Arc<dyn CreateRecommendorUseCase>,
    pub list: Arc<dyn ListRecommendorsUseCase>,
    pub get: Arc<dyn GetRecommendorUseCase>,
    pub update: Arc<dyn UpdateRecommendorUseCase>,
    pub delete: Arc<dyn DeleteRecommendorUseCase>,
    pub regenerate_qr: Arc<dyn RegenerateQrCodesUseCase>,
}
