use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recommendors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recommendors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recommendors::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Recommendors::Gender).string_len(20).not_null())
                    .col(ColumnDef::new(Recommendors::Age).integer().not_null())
                    .col(ColumnDef::new(Recommendors::IdNumber).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Recommendors::Avatar)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Recommendors::Bio).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Recommendors::ValidFrom)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Recommendors::ValidUntil)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Recommendors::Phone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Recommendors::Email)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Recommendors::ProvinceCode)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Recommendors::CityCode).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Recommendors::DistrictCode)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Recommendors::RegionAddress)
                            .string_len(500)
                            .not_null(),
                    )
                    // Legacy column kept for the region in-use check; the API never
                    // writes it. No foreign key on purpose.
                    .col(ColumnDef::new(Recommendors::RegionId).integer())
                    .col(
                        ColumnDef::new(Recommendors::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Recommendors::Rating)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Recommendors::QrCodeWeb)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Recommendors::QrCodeWxapp)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Recommendors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Recommendors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Recommendors::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recommendors_id_number_unique")
                    .table(Recommendors::Table)
                    .col(Recommendors::IdNumber)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            ("idx_recommendors_province_code", Recommendors::ProvinceCode),
            ("idx_recommendors_city_code", Recommendors::CityCode),
            ("idx_recommendors_district_code", Recommendors::DistrictCode),
            ("idx_recommendors_region_id", Recommendors::RegionId),
            ("idx_recommendors_deleted_at", Recommendors::DeletedAt),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Recommendors::Table)
                        .col(col)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recommendors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Recommendors {
    Table,
    Id,
    Name,
    Gender,
    Age,
    IdNumber,
    Avatar,
    Bio,
    ValidFrom,
    ValidUntil,
    Phone,
    Email,
    ProvinceCode,
    CityCode,
    DistrictCode,
    RegionAddress,
    RegionId,
    Status,
    Rating,
    QrCodeWeb,
    QrCodeWxapp,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
