use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use crate::destination::adapter::outgoing::sea_orm_entity::destinations;
use crate::destination::application::domain::entities::Destination;
use crate::recommendor::application::domain::entities::Recommendor;
use crate::recommendor::application::ports::outgoing::recommendor_repository::{
    NewRecommendor, RecommendorChanges, RecommendorFilter, RecommendorRepository,
    RecommendorRepositoryError,
};
use crate::shared::pagination::{PageRequest, SortOrder};

use super::sea_orm_entity::recommendors::{
    ActiveModel as RecommendorActiveModel, Column as RecommendorColumn,
    Entity as RecommendorEntity, Model as RecommendorModel,
};

#[derive(Clone, Debug)]
pub struct RecommendorRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecommendorRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn sort_column(name: &str) -> RecommendorColumn {
        match name {
            "name" => RecommendorColumn::Name,
            "age" => RecommendorColumn::Age,
            "rating" => RecommendorColumn::Rating,
            "created_at" => RecommendorColumn::CreatedAt,
            "updated_at" => RecommendorColumn::UpdatedAt,
            _ => RecommendorColumn::Id,
        }
    }

    fn live() -> Select<RecommendorEntity> {
        RecommendorEntity::find().filter(RecommendorColumn::DeletedAt.is_null())
    }

    async fn find_live(&self, id: i32) -> Result<RecommendorModel, RecommendorRepositoryError> {
        Self::live()
            .filter(RecommendorColumn::Id.eq(id))
            .one(&*self.db)
            .await
            .map_err(|e| RecommendorRepositoryError::Database(e.to_string()))?
            .ok_or(RecommendorRepositoryError::NotFound)
    }

    fn map_save_error(e: sea_orm::DbErr) -> RecommendorRepositoryError {
        let msg = e.to_string().to_lowercase();
        if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique") {
            RecommendorRepositoryError::DuplicateIdNumber
        } else {
            RecommendorRepositoryError::Database(e.to_string())
        }
    }
}

#[async_trait]
impl RecommendorRepository for RecommendorRepositoryPostgres {
    async fn insert(
        &self,
        recommendor: NewRecommendor,
    ) -> Result<Recommendor, RecommendorRepositoryError> {
        let now = Utc::now();
        let active = RecommendorActiveModel {
            name: Set(recommendor.name),
            gender: Set(recommendor.gender),
            age: Set(recommendor.age),
            id_number: Set(recommendor.id_number),
            avatar: Set(recommendor.avatar),
            bio: Set(recommendor.bio),
            valid_from: Set(recommendor.valid_from.into()),
            valid_until: Set(recommendor.valid_until.into()),
            phone: Set(recommendor.phone),
            email: Set(recommendor.email),
            province_code: Set(recommendor.province_code),
            city_code: Set(recommendor.city_code),
            district_code: Set(recommendor.district_code),
            region_id: Set(None),
            region_address: Set(recommendor.region_address),
            status: Set(recommendor.status),
            rating: Set(0.0),
            qr_code_web: Set(String::new()),
            qr_code_wxapp: Set(String::new()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_save_error)?;

        Ok(inserted.into())
    }

    async fn list(
        &self,
        filter: RecommendorFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Recommendor>, u64), RecommendorRepositoryError> {
        let mut query = Self::live();

        if let Some(name) = &filter.name {
            query = query.filter(Expr::col(RecommendorColumn::Name).ilike(format!("%{}%", name)));
        }
        if let Some(gender) = filter.gender {
            query = query.filter(RecommendorColumn::Gender.eq(gender));
        }
        if let Some(code) = &filter.province_code {
            query = query.filter(RecommendorColumn::ProvinceCode.eq(code.clone()));
        }
        if let Some(code) = &filter.city_code {
            query = query.filter(RecommendorColumn::CityCode.eq(code.clone()));
        }
        if let Some(code) = &filter.district_code {
            query = query.filter(RecommendorColumn::DistrictCode.eq(code.clone()));
        }
        for term in &filter.region_terms {
            query = query.filter(RecommendorColumn::RegionAddress.contains(term));
        }
        if let Some(status) = &filter.status {
            query = query.filter(RecommendorColumn::Status.eq(status.clone()));
        }
        if let Some(min_age) = filter.min_age {
            query = query.filter(RecommendorColumn::Age.gte(min_age));
        }
        if let Some(max_age) = filter.max_age {
            query = query.filter(RecommendorColumn::Age.lte(max_age));
        }

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| RecommendorRepositoryError::Database(e.to_string()))?;

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
            .map_err(|e| RecommendorRepositoryError::Database(e.to_string()))?;

        Ok((models.into_iter().map(Recommendor::from).collect(), total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Recommendor, RecommendorRepositoryError> {
        let model = self.find_live(id).await?;
        Ok(model.into())
    }

    async fn find_with_destinations(
        &self,
        id: i32,
    ) -> Result<Recommendor, RecommendorRepositoryError> {
        let model = self.find_live(id).await?;

        let destination_models = destinations::Entity::find()
            .filter(destinations::Column::RecommendorId.eq(id))
            .filter(destinations::Column::DeletedAt.is_null())
            .order_by(destinations::Column::Id, Order::Asc)
            .all(&*self.db)
            .await
            .map_err(|e| RecommendorRepositoryError::Database(e.to_string()))?;

        let mut recommendor: Recommendor = model.into();
        recommendor.destinations = destination_models
            .into_iter()
            .map(Destination::from)
            .collect();

        Ok(recommendor)
    }

    async fn id_number_exists(
        &self,
        id_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RecommendorRepositoryError> {
        let mut query = Self::live().filter(RecommendorColumn::IdNumber.eq(id_number));
        if let Some(id) = exclude_id {
            query = query.filter(RecommendorColumn::Id.ne(id));
        }

        let count = query
            .count(&*self.db)
            .await
            .map_err(|e| RecommendorRepositoryError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn update(
        &self,
        id: i32,
        changes: RecommendorChanges,
    ) -> Result<Recommendor, RecommendorRepositoryError> {
        let model = self.find_live(id).await?;

        let mut active: RecommendorActiveModel = model.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(gender) = changes.gender {
            active.gender = Set(gender);
        }
        if let Some(age) = changes.age {
            active.age = Set(age);
        }
        if let Some(id_number) = changes.id_number {
            active.id_number = Set(id_number);
        }
        if let Some(avatar) = changes.avatar {
            active.avatar = Set(avatar);
        }
        if let Some(bio) = changes.bio {
            active.bio = Set(bio);
        }
        if let Some(valid_from) = changes.valid_from {
            active.valid_from = Set(valid_from.into());
        }
        if let Some(valid_until) = changes.valid_until {
            active.valid_until = Set(valid_until.into());
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(phone);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(code) = changes.province_code {
            active.province_code = Set(code);
        }
        if let Some(code) = changes.city_code {
            active.city_code = Set(code);
        }
        if let Some(code) = changes.district_code {
            active.district_code = Set(code);
        }
        if let Some(region_address) = changes.region_address {
            active.region_address = Set(region_address);
        }
        if let Some(status) = changes.status {
            active.status = Set(status);
        }
        if let Some(rating) = changes.rating {
            active.rating = Set(rating);
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_save_error)?;

        Ok(updated.into())
    }

    async fn save_qr_codes(
        &self,
        id: i32,
        web: String,
        wxapp: String,
    ) -> Result<Recommendor, RecommendorRepositoryError> {
        let model = self.find_live(id).await?;

        let mut active: RecommendorActiveModel = model.into();
        active.qr_code_web = Set(web);
        active.qr_code_wxapp = Set(wxapp);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| RecommendorRepositoryError::Database(e.to_string()))?;

        Ok(updated.into())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), RecommendorRepositoryError> {
        let model = self.find_live(id).await?;

        let mut active: RecommendorActiveModel = model.into();
        active.deleted_at = Set(Some(Utc::now().into()));
        active
            .update(&*self.db)
            .await
            .map_err(|e| RecommendorRepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn hard_delete(&self, id: i32) -> Result<(), RecommendorRepositoryError> {
        RecommendorEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RecommendorRepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
