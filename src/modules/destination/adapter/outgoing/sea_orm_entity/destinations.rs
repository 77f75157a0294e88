use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "destinations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub recommendor_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub image: String,
    pub address: String,
    pub category: String,
    pub rating: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::recommendor::adapter::outgoing::sea_orm_entity::recommendors::Entity",
        from = "Column::RecommendorId",
        to = "crate::recommendor::adapter::outgoing::sea_orm_entity::recommendors::Column::Id"
    )]
    Recommendor,
}

impl Related<crate::recommendor::adapter::outgoing::sea_orm_entity::recommendors::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Recommendor.def()
    }
}

impl From<Model> for crate::destination::application::domain::entities::Destination {
    fn from(model: Model) -> Self {
        use chrono::Utc;

        Self {
            id: model.id,
            recommendor_id: model.recommendor_id,
            name: model.name,
            description: model.description,
            image: model.image,
            address: model.address,
            category: model.category,
            rating: model.rating,
            status: model.status,
            recommendor: None,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
