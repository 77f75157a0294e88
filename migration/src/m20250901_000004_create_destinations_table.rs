use sea_orm_migration::prelude::*;

use crate::m20250901_000003_create_recommendors_table::Recommendors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Destinations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Destinations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Destinations::RecommendorId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Destinations::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Destinations::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    // Serialized list of image URLs, stored as text like the
                    // admin frontend sends it.
                    .col(ColumnDef::new(Destinations::Image).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Destinations::Address)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Destinations::Category)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Destinations::Rating)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Destinations::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Destinations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Destinations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Destinations::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destinations_recommendor_id")
                            .from(Destinations::Table, Destinations::RecommendorId)
                            .to(Recommendors::Table, Recommendors::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_destinations_recommendor_id")
                    .table(Destinations::Table)
                    .col(Destinations::RecommendorId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_destinations_deleted_at")
                    .table(Destinations::Table)
                    .col(Destinations::DeletedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Destinations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Destinations {
    Table,
    Id,
    RecommendorId,
    Name,
    Description,
    Image,
    Address,
    Category,
    Rating,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
