use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, GetCurrentAdminUseCase, LoginUseCase, MockChangePasswordUseCase,
    MockGetCurrentAdminUseCase, MockLoginUseCase, MockRefreshTokenUseCase, RefreshTokenUseCase,
};
use crate::destination::application::destination_use_cases::DestinationUseCases;
use crate::destination::application::ports::incoming::use_cases::{
    CreateDestinationUseCase, DeleteDestinationUseCase, GetDestinationUseCase,
    ListDestinationsByRecommendorUseCase, ListDestinationsUseCase, MockCreateDestinationUseCase,
    MockDeleteDestinationUseCase, MockGetDestinationUseCase,
    MockListDestinationsByRecommendorUseCase, MockListDestinationsUseCase,
    MockUpdateDestinationUseCase, UpdateDestinationUseCase,
};
use crate::recommendor::application::ports::incoming::use_cases::{
    CreateRecommendorUseCase, DeleteRecommendorUseCase, GetRecommendorUseCase,
    ListRecommendorsUseCase, MockCreateRecommendorUseCase, MockDeleteRecommendorUseCase,
    MockGetRecommendorUseCase, MockListRecommendorsUseCase, MockRegenerateQrCodesUseCase,
    MockUpdateRecommendorUseCase, RegenerateQrCodesUseCase, UpdateRecommendorUseCase,
};
use crate::recommendor::application::recommendor_use_cases::RecommendorUseCases;
use crate::region::application::ports::incoming::use_cases::{
    CreateRegionUseCase, DeleteRegionUseCase, GetRegionUseCase, ListRegionsUseCase,
    MockCreateRegionUseCase, MockDeleteRegionUseCase, MockGetRegionUseCase,
    MockListRegionsUseCase, MockUpdateRegionUseCase, UpdateRegionUseCase,
};
use crate::region::application::region_use_cases::RegionUseCases;
use crate::upload::application::ports::incoming::use_cases::{
    MockUploadFileUseCase, UploadFileUseCase,
};
use crate::AppState;

/// Assembles an `AppState` where every use case slot defaults to an
/// expectation-free mock, so a handler reaching into the wrong slot panics
/// loudly in tests.
#[derive(Default)]
pub struct TestAppStateBuilder {
    login: Option<Arc<dyn LoginUseCase>>,
    refresh_token: Option<Arc<dyn RefreshTokenUseCase>>,
    current_admin: Option<Arc<dyn GetCurrentAdminUseCase>>,
    change_password: Option<Arc<dyn ChangePasswordUseCase>>,

    create_region: Option<Arc<dyn CreateRegionUseCase>>,
    list_regions: Option<Arc<dyn ListRegionsUseCase>>,
    get_region: Option<Arc<dyn GetRegionUseCase>>,
    update_region: Option<Arc<dyn UpdateRegionUseCase>>,
    delete_region: Option<Arc<dyn DeleteRegionUseCase>>,

    create_recommendor: Option<Arc<dyn CreateRecommendorUseCase>>,
    list_recommendors: Option<Arc<dyn ListRecommendorsUseCase>>,
    get_recommendor: Option<Arc<dyn GetRecommendorUseCase>>,
    update_recommendor: Option<Arc<dyn UpdateRecommendorUseCase>>,
    delete_recommendor: Option<Arc<dyn DeleteRecommendorUseCase>>,
    regenerate_qr: Option<Arc<dyn RegenerateQrCodesUseCase>>,

    create_destination: Option<Arc<dyn CreateDestinationUseCase>>,
    list_destinations: Option<Arc<dyn ListDestinationsUseCase>>,
    get_destination: Option<Arc<dyn GetDestinationUseCase>>,
    update_destination: Option<Arc<dyn UpdateDestinationUseCase>>,
    delete_destination: Option<Arc<dyn DeleteDestinationUseCase>>,
    list_by_recommendor: Option<Arc<dyn ListDestinationsByRecommendorUseCase>>,

    uploads: Option<Arc<dyn UploadFileUseCase>>,
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl LoginUseCase + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn with_refresh_token(mut self, uc: impl RefreshTokenUseCase + 'static) -> Self {
        self.refresh_token = Some(Arc::new(uc));
        self
    }

    pub fn with_current_admin(mut self, uc: impl GetCurrentAdminUseCase + 'static) -> Self {
        self.current_admin = Some(Arc::new(uc));
        self
    }

    pub fn with_change_password(mut self, uc: impl ChangePasswordUseCase + 'static) -> Self {
        self.change_password = Some(Arc::new(uc));
        self
    }

    pub fn with_create_region(mut self, uc: impl CreateRegionUseCase + 'static) -> Self {
        self.create_region = Some(Arc::new(uc));
        self
    }

    pub fn with_list_regions(mut self, uc: impl ListRegionsUseCase + 'static) -> Self {
        self.list_regions = Some(Arc::new(uc));
        self
    }

    pub fn with_get_region(mut self, uc: impl GetRegionUseCase + 'static) -> Self {
        self.get_region = Some(Arc::new(uc));
        self
    }

    pub fn with_update_region(mut self, uc: impl UpdateRegionUseCase + 'static) -> Self {
        self.update_region = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_region(mut self, uc: impl DeleteRegionUseCase + 'static) -> Self {
        self.delete_region = Some(Arc::new(uc));
        self
    }

    pub fn with_create_recommendor(mut self, uc: impl CreateRecommendorUseCase + 'static) -> Self {
        self.create_recommendor = Some(Arc::new(uc));
        self
    }

    pub fn with_list_recommendors(mut self, uc: impl ListRecommendorsUseCase + 'static) -> Self {
        self.list_recommendors = Some(Arc::new(uc));
        self
    }

    pub fn with_get_recommendor(mut self, uc: impl GetRecommendorUseCase + 'static) -> Self {
        self.get_recommendor = Some(Arc::new(uc));
        self
    }

    pub fn with_update_recommendor(mut self, uc: impl UpdateRecommendorUseCase + 'static) -> Self {
        self.update_recommendor = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_recommendor(mut self, uc: impl DeleteRecommendorUseCase + 'static) -> Self {
        self.delete_recommendor = Some(Arc::new(uc));
        self
    }

    pub fn with_regenerate_qr(mut self, uc: impl RegenerateQrCodesUseCase + 'static) -> Self {
        self.regenerate_qr = Some(Arc::new(uc));
        self
    }

    pub fn with_create_destination(mut self, uc: impl CreateDestinationUseCase + 'static) -> Self {
        self.create_destination = Some(Arc::new(uc));
        self
    }

    pub fn with_list_destinations(mut self, uc: impl ListDestinationsUseCase + 'static) -> Self {
        self.list_destinations = Some(Arc::new(uc));
        self
    }

    pub fn with_get_destination(mut self, uc: impl GetDestinationUseCase + 'static) -> Self {
        self.get_destination = Some(Arc::new(uc));
        self
    }

    pub fn with_update_destination(mut self, uc: impl UpdateDestinationUseCase + 'static) -> Self {
        self.update_destination = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_destination(mut self, uc: impl DeleteDestinationUseCase + 'static) -> Self {
        self.delete_destination = Some(Arc::new(uc));
        self
    }

    pub fn with_list_by_recommendor(
        mut self,
        uc: impl ListDestinationsByRecommendorUseCase + 'static,
    ) -> Self {
        self.list_by_recommendor = Some(Arc::new(uc));
        self
    }

    pub fn with_uploads(mut self, uc: impl UploadFileUseCase + 'static) -> Self {
        self.uploads = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: AuthUseCases {
                login: self
                    .login
                    .unwrap_or_else(|| Arc::new(MockLoginUseCase::new())),
                refresh_token: self
                    .refresh_token
                    .unwrap_or_else(|| Arc::new(MockRefreshTokenUseCase::new())),
                current_admin: self
                    .current_admin
                    .unwrap_or_else(|| Arc::new(MockGetCurrentAdminUseCase::new())),
                change_password: self
                    .change_password
                    .unwrap_or_else(|| Arc::new(MockChangePasswordUseCase::new())),
            },
            regions: RegionUseCases {
                create: self
                    .create_region
                    .unwrap_or_else(|| Arc::new(MockCreateRegionUseCase::new())),
                list: self
                    .list_regions
                    .unwrap_or_else(|| Arc::new(MockListRegionsUseCase::new())),
                get: self
                    .get_region
                    .unwrap_or_else(|| Arc::new(MockGetRegionUseCase::new())),
                update: self
                    .update_region
                    .unwrap_or_else(|| Arc::new(MockUpdateRegionUseCase::new())),
                delete: self
                    .delete_region
                    .unwrap_or_else(|| Arc::new(MockDeleteRegionUseCase::new())),
            },
            recommendors: RecommendorUseCases {
                create: self
                    .create_recommendor
                    .unwrap_or_else(|| Arc::new(MockCreateRecommendorUseCase::new())),
                list: self
                    .list_recommendors
                    .unwrap_or_else(|| Arc::new(MockListRecommendorsUseCase::new())),
                get: self
                    .get_recommendor
                    .unwrap_or_else(|| Arc::new(MockGetRecommendorUseCase::new())),
                update: self
                    .update_recommendor
                    .unwrap_or_else(|| Arc::new(MockUpdateRecommendorUseCase::new())),
                delete: self
                    .delete_recommendor
                    .unwrap_or_else(|| Arc::new(MockDeleteRecommendorUseCase::new())),
                regenerate_qr: self
                    .regenerate_qr
                    .unwrap_or_else(|| Arc::new(MockRegenerateQrCodesUseCase::new())),
            },
            destinations: DestinationUseCases {
                create: self
                    .create_destination
                    .unwrap_or_else(|| Arc::new(MockCreateDestinationUseCase::new())),
                list: self
                    .list_destinations
                    .unwrap_or_else(|| Arc::new(MockListDestinationsUseCase::new())),
                get: self
                    .get_destination
                    .unwrap_or_else(|| Arc::new(MockGetDestinationUseCase::new())),
                update: self
                    .update_destination
                    .unwrap_or_else(|| Arc::new(MockUpdateDestinationUseCase::new())),
                delete: self
                    .delete_destination
                    .unwrap_or_else(|| Arc::new(MockDeleteDestinationUseCase::new())),
                list_by_recommendor: self
                    .list_by_recommendor
                    .unwrap_or_else(|| Arc::new(MockListDestinationsByRecommendorUseCase::new())),
            },
            uploads: self
                .uploads
                .unwrap_or_else(|| Arc::new(MockUploadFileUseCase::new())),
        })
    }
}
