use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(pk_auto(Pet::Id))
                    .col(string(Pet::Name))
                    .col(string_len(Pet::Species, 16))
                    .col(string_null(Pet::Breed))
                    .col(integer(Pet::AgeMonths))
                    .col(string_null(Pet::Description))
                    .col(string_null(Pet::PhotoPath))
                    .col(string_len(Pet::Status, 16))
                    .col(timestamp_with_time_zone(Pet::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pet {
    Table,
    Id,
    Name,
    Species,
    Breed,
    AgeMonths,
    Description,
    PhotoPath,
    Status,
    CreatedAt,
}
