use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminInfo;
use crate::auth::application::ports::incoming::use_cases::{
    GetCurrentAdminError, GetCurrentAdminUseCase,
};
use crate::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError,
};

pub struct CurrentAdminService {
    repository: Arc<dyn AdminRepository>,
}

impl CurrentAdminService {
    pub fn new(repository: Arc<dyn AdminRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetCurrentAdminUseCase for CurrentAdminService {
    async fn get_current_admin(&self, admin_id: i32) -> Result<AdminInfo, GetCurrentAdminError> {
        match self.repository.find_by_id(admin_id).await {
            Ok(admin) => Ok(admin.info()),
            Err(AdminRepositoryError::NotFound) => Err(GetCurrentAdminError::AdminNotFound),
            Err(AdminRepositoryError::Database(msg)) => {
                Err(GetCurrentAdminError::RepositoryError(msg))
            }
        }
    }
}
