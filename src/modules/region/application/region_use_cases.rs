use std::sync::Arc;

use crate::region::application::ports::incoming::use_cases::{
    CreateRegionUseCase, DeleteRegionUseCase, GetRegionUseCase, ListRegionsUseCase,
    UpdateRegionUseCase,
};

/// Region use cases bundled for `AppState`.
#[derive(Clone)]
pub struct RegionUseCases {
    pub create: Arc<dyn CreateRegionUseCase>,
    pub list: Arc<dyn ListRegionsUseCase>,
    pub get: Arc<dyn GetRegionUseCase>,
    pub update: Arc<dyn UpdateRegionUseCase>,
    pub delete: Arc<dyn DeleteRegionUseCase>,
}
