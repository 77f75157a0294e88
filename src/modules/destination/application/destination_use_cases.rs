use std::sync::Arc;

use crate::destination::application::ports::incoming::use_cases::{
    CreateDestinationUseCase, DeleteDestinationUseCase, GetDestinationUseCase,
    ListDestinationsByRecommendorUseCase, ListDestinationsUseCase, UpdateDestinationUseCase,
};

/// Destination use cases bundled for `AppState`.
#[derive(Clone)]
pub struct DestinationUseCases {
    pub create: Arc<dyn CreateDestinationUseCase>,
    pub list: Arc<dyn ListDestinationsUseCase>,
    pub get: Arc<dyn GetDestinationUseCase>,
    pub update: Arc<dyn UpdateDestinationUseCase>,
    pub delete: Arc<dyn DeleteDestinationUseCase>,
    pub list_by_recommendor: Arc<dyn ListDestinationsByRecommendorUseCase>,
}
