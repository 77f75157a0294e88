use sea_orm::entity::prelude::*;

use crate::recommendor::application::domain::entities::Gender;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recommendors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    #[sea_orm(unique)]
    pub id_number: String,
    pub avatar: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub valid_from: DateTimeWithTimeZone,
    pub valid_until: DateTimeWithTimeZone,
    pub phone: String,
    pub email: String,
    pub province_code: String,
    pub city_code: String,
    pub district_code: String,
    // Kept from an earlier schema generation; rows are located by the
    // province/city/district codes, not this column.
    pub region_id: Option<i32>,
    pub region_address: String,
    pub status: String,
    pub rating: f64,
    #[sea_orm(column_type = "Text")]
    pub qr_code_web: String,
    #[sea_orm(column_type = "Text")]
    pub qr_code_wxapp: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::destination::adapter::outgoing::sea_orm_entity::destinations::Entity"
    )]
    Destinations,
}

impl Related<crate::destination::adapter::outgoing::sea_orm_entity::destinations::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Destinations.def()
    }
}

impl From<Model> for crate::recommendor::application::domain::entities::Recommendor {
    fn from(model: Model) -> Self {
        use chrono::Utc;

        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            age: model.age,
            id_number: model.id_number,
            avatar: model.avatar,
            bio: model.bio,
            valid_from: model.valid_from.with_timezone(&Utc),
            valid_until: model.valid_until.with_timezone(&Utc),
            phone: model.phone,
            email: model.email,
            province_code: model.province_code,
            city_code: model.city_code,
            district_code: model.district_code,
            region_address: model.region_address,
            status: model.status,
            rating: model.rating,
            qr_code_web: model.qr_code_web,
            qr_code_wxapp: model.qr_code_wxapp,
            destinations: vec![],
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
