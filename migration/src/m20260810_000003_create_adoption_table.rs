use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260810_000001_create_user_table::User, m20260810_000002_create_pet_table::Pet,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Adoption::Table)
                    .if_not_exists()
                    .col(pk_auto(Adoption::Id))
                    .col(integer(Adoption::PetId))
                    .col(integer(Adoption::UserId))
                    .col(string_null(Adoption::Message))
                    .col(string_len(Adoption::Status, 16))
                    .col(timestamp_with_time_zone(Adoption::CreatedAt))
                    .col(timestamp_with_time_zone_null(Adoption::DecidedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_adoption_pet")
                            .from(Adoption::Table, Adoption::PetId)
                            .to(Pet::Table, Pet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_adoption_user")
                            .from(Adoption::Table, Adoption::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Adoption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Adoption {
    Table,
    Id,
    PetId,
    UserId,
    Message,
    Status,
    CreatedAt,
    DecidedAt,
}
