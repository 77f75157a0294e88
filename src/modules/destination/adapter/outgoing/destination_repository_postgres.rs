use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use crate::destination::application::domain::entities::Destination;
use crate::destination::application::ports::outgoing::destination_repository::{
    DestinationChanges, DestinationFilter, DestinationRepository, DestinationRepositoryError,
    NewDestination,
};
use crate::recommendor::adapter::outgoing::sea_orm_entity::recommendors;
use crate::recommendor::application::domain::entities::Recommendor;
use crate::shared::pagination::{PageRequest, SortOrder};

use super::sea_orm_entity::destinations::{
    ActiveModel as DestinationActiveModel, Column as DestinationColumn,
    Entity as DestinationEntity, Model as DestinationModel,
};

#[derive(Clone, Debug)]
pub struct DestinationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DestinationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn sort_column(name: &str) -> DestinationColumn {
        match name {
            "name" => DestinationColumn::Name,
            "category" => DestinationColumn::Category,
            "rating" => DestinationColumn::Rating,
            "created_at" => DestinationColumn::CreatedAt,
            "updated_at" => DestinationColumn::UpdatedAt,
            _ => DestinationColumn::Id,
        }
    }

    fn live() -> Select<DestinationEntity> {
        DestinationEntity::find().filter(DestinationColumn::DeletedAt.is_null())
    }

    async fn find_live(&self, id: i32) -> Result<DestinationModel, DestinationRepositoryError> {
        Self::live()
            .filter(DestinationColumn::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(|e| DestinationRepositoryError::Database(e.to_string()))?
            .ok_or(DestinationRepositoryError::NotFound)
    }
}

#[async_trait]
impl DestinationRepository for DestinationRepositoryPostgres {
    async fn insert(
        &self,
        destination: NewDestination,
    ) -> Result<Destination, DestinationRepositoryError> {
        let now = Utc::now();
        let active = DestinationActiveModel {
            recommendor_id: Set(destination.recommendor_id),
            name: Set(destination.name),
            description: Set(destination.description),
            image: Set(destination.image),
            address: Set(destination.address),
            category: Set(destination.category),
            rating: Set(0.0),
            status: Set(destination.status),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| DestinationRepositoryError::Database(e.to_string()))?;

        Ok(inserted.into())
    }

    async fn list(
        &self,
        filter: DestinationFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Destination>, u64), DestinationRepositoryError> {
        let mut query = Self::live();

        if let Some(recommendor_id) = filter.recommendor_id {
            query = query.filter(DestinationColumn::RecommendorId.eq(recommendor_id));
        }
        if let Some(name) = &filter.name {
            query = query.filter(Expr::col(DestinationColumn::Name).ilike(format!("%{}%", name)));
        }
        if let Some(category) = &filter.category {
            query = query.filter(DestinationColumn::Category.eq(category.clone()));
        }
        if let Some(status) = &filter.status {
            query = query.filter(DestinationColumn::Status.eq(status.clone()));
        }

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| DestinationRepositoryError::Database(e.to_string()))?;

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
            .map_err(|e| DestinationRepositoryError::Database(e.to_string()))?;

        Ok((models.into_iter().map(Destination::from).collect(), total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Destination, DestinationRepositoryError> {
        let model = self.find_live(id).await?;
        Ok(model.into())
    }

    async fn find_with_recommendor(
        &self,
        id: i32,
    ) -> Result<Destination, DestinationRepositoryError> {
        let model = self.find_live(id).await?;

        let recommendor_model = recommendors::Entity::find()
            .filter(recommendors::Column::Id.eq(model.recommendor_id))
            .filter(recommendors::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| DestinationRepositoryError::Database(e.to_string()))?;

        let mut destination: Destination = model.into();
        destination.recommendor = recommendor_model.map(|m| Box::new(Recommendor::from(m)));

        Ok(destination)
    }

    async fn recommendor_exists(&self, id: i32) -> Result<bool, DestinationRepositoryError> {
        let count = recommendors::Entity::find()
            .filter(recommendors::Column::Id.eq(id))
            .filter(recommendors::Column::DeletedAt.is_null())
            .count(&*self.db)
            .await
            .map_err(|e| DestinationRepositoryError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn update(
        &self,
        id: i32,
        changes: DestinationChanges,
    ) -> Result<Destination, DestinationRepositoryError> {
        let model = self.find_live(id).await?;

        let mut active: DestinationActiveModel = model.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(image) = changes.image {
            active.image = Set(image);
        }
        if let Some(address) = changes.address {
            active.address = Set(address);
        }
        if let Some(category) = changes.category {
            active.category = Set(category);
        }
        if let Some(rating) = changes.rating {
            active.rating = Set(rating);
        }
        if let Some(status) = changes.status {
            active.status = Set(status);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| DestinationRepositoryError::Database(e.to_string()))?;

        Ok(updated.into())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), DestinationRepositoryError> {
        let model = self.find_live(id).await?;

        let mut active: DestinationActiveModel = model.into();
        active.deleted_at = Set(Some(Utc::now().into()));
        active
            .update(&*self.db)
            .await
            .map_err(|e| DestinationRepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
