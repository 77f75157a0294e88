use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::auth::application::domain::entities::AdminRecord;
use crate::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError,
};

use super::sea_orm_entity::admins::{
    ActiveModel as AdminActiveModel, Column as AdminColumn, Entity as AdminEntity,
    Model as AdminModel,
};

#[derive(Clone, Debug)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: AdminModel) -> AdminRecord {
        AdminRecord {
            id: model.id,
            username: model.username,
            password_hash: model.password,
            role: model.role,
            name: model.name,
            email: model.email,
            phone: model.phone,
            avatar: model.avatar,
            status: model.status,
            last_login: model.last_login.map(|t| t.with_timezone(&Utc)),
        }
    }

    async fn find_live_by_id(&self, id: i32) -> Result<AdminModel, AdminRepositoryError> {
        AdminEntity::find_by_id(id)
            .filter(AdminColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::Database(e.to_string()))?
            .ok_or(AdminRepositoryError::NotFound)
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<AdminRecord, AdminRepositoryError> {
        let admin = AdminEntity::find()
            .filter(AdminColumn::Username.eq(username))
            .filter(AdminColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::Database(e.to_string()))?
            .ok_or(AdminRepositoryError::NotFound)?;

        Ok(Self::map_to_record(admin))
    }

    async fn find_by_id(&self, id: i32) -> Result<AdminRecord, AdminRepositoryError> {
        let admin = self.find_live_by_id(id).await?;
        Ok(Self::map_to_record(admin))
    }

    async fn record_login(&self, id: i32, at: DateTime<Utc>) -> Result<(), AdminRepositoryError> {
        let admin = self.find_live_by_id(id).await?;

        let mut active: AdminActiveModel = admin.into();
        active.last_login = Set(Some(at.into()));
        active
            .update(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update_password(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<(), AdminRepositoryError> {
        let admin = self.find_live_by_id(id).await?;

        let mut active: AdminActiveModel = admin.into();
        active.password = Set(password_hash);
        active
            .update(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
