use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use crate::recommendor::adapter::outgoing::sea_orm_entity::recommendors;
use crate::region::application::domain::entities::Region;
use crate::region::application::ports::outgoing::region_repository::{
    NewRegion, RegionChanges, RegionFilter, RegionRepository, RegionRepositoryError,
};
use crate::shared::pagination::{PageRequest, SortOrder};

use super::sea_orm_entity::regions::{
    ActiveModel as RegionActiveModel, Column as RegionColumn, Entity as RegionEntity,
    Model as RegionModel,
};

#[derive(Clone, Debug)]
pub struct RegionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_region(model: RegionModel) -> Region {
        Region {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn sort_column(name: &str) -> RegionColumn {
        match name {
            "name" => RegionColumn::Name,
            "created_at" => RegionColumn::CreatedAt,
            "updated_at" => RegionColumn::UpdatedAt,
            _ => RegionColumn::Id,
        }
    }

    fn live() -> Select<RegionEntity> {
        RegionEntity::find().filter(RegionColumn::DeletedAt.is_null())
    }

    async fn find_live(&self, id: i32) -> Result<RegionModel, RegionRepositoryError> {
        Self::live()
            .filter(RegionColumn::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(|e| RegionRepositoryError::Database(e.to_string()))?
            .ok_or(RegionRepositoryError::NotFound)
    }

    fn map_insert_error(e: sea_orm::DbErr) -> RegionRepositoryError {
        let msg = e.to_string().to_lowercase();
        if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique") {
            RegionRepositoryError::DuplicateName
        } else {
            RegionRepositoryError::Database(e.to_string())
        }
    }
}

#[async_trait]
impl RegionRepository for RegionRepositoryPostgres {
    async fn insert(&self, region: NewRegion) -> Result<Region, RegionRepositoryError> {
        let now = Utc::now();
        let active = RegionActiveModel {
            name: Set(region.name),
            description: Set(region.description),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_region(inserted))
    }

    async fn list(
        &self,
        filter: RegionFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Region>, u64), RegionRepositoryError> {
        let mut query = Self::live();

        if let Some(name) = &filter.name {
            query = query.filter(Expr::col(RegionColumn::Name).ilike(format!("%{}%", name)));
        }

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| RegionRepositoryError::Database(e.to_string()))?;

        let order = match page.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let models = query
            .order_by(Self::sort_column(&page.sort_by), order)
            .offset(page.offset())
            .limit(page.page_size)
            .all(&*self.db)
            .await
            .map_err(|e| RegionRepositoryError::Database(e.to_string()))?;

        Ok((models.into_iter().map(Self::map_to_region).collect(), total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Region, RegionRepositoryError> {
        let model = self.find_live(id).await?;
        Ok(Self::map_to_region(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: RegionChanges,
    ) -> Result<Region, RegionRepositoryError> {
        let model = self.find_live(id).await?;

        let mut active: RegionActiveModel = model.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_region(updated))
    }

    async fn soft_delete(&self, id: i32) -> Result<(), RegionRepositoryError> {
        let model = self.find_live(id).await?;

        let mut active: RegionActiveModel = model.into();
        active.deleted_at = Set(Some(Utc::now().into()));
        active
            .update(&*self.db)
            .await
            .map_err(|e| RegionRepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn recommendor_reference_count(&self, id: i32) -> Result<u64, RegionRepositoryError> {
        recommendors::Entity::find()
            .filter(recommendors::Column::RegionId.eq(id))
            .filter(recommendors::Column::DeletedAt.is_null())
            .count(&*self.db)
            .await
            .map_err(|e| RegionRepositoryError::Database(e.to_string()))
    }
}
