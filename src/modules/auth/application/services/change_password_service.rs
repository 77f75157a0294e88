use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase,
};
use crate::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError,
};
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;

const MIN_PASSWORD_LEN: usize = 6;

pub struct ChangePasswordService {
    repository: Arc<dyn AdminRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ChangePasswordService {
    pub fn new(repository: Arc<dyn AdminRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl ChangePasswordUseCase for ChangePasswordService {
    async fn change_password(
        &self,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        if command.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ChangePasswordError::WeakPassword);
        }
        if command.new_password == command.old_password {
            return Err(ChangePasswordError::PasswordUnchanged);
        }

        let admin = match self.repository.find_by_id(command.admin_id).await {
            Ok(admin) => admin,
            Err(AdminRepositoryError::NotFound) => return Err(ChangePasswordError::AdminNotFound),
            Err(AdminRepositoryError::Database(msg)) => {
                return Err(ChangePasswordError::RepositoryError(msg))
            }
        };

        let matches = self
            .hasher
            .verify_password(&command.old_password, &admin.password_hash)
            .unwrap_or(false);
        if !matches {
            return Err(ChangePasswordError::WrongOldPassword);
        }

        let new_hash = self
            .hasher
            .hash_password(&command.new_password)
            .map_err(|_| ChangePasswordError::HashingFailed)?;

        self.repository
            .update_password(admin.id, new_hash)
            .await
            .map_err(|e| match e {
                AdminRepositoryError::NotFound => ChangePasswordError::AdminNotFound,
                AdminRepositoryError::Database(msg) => ChangePasswordError::RepositoryError(msg),
            })
    }
}
