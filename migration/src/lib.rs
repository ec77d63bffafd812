pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_user_table;
mod m20260810_000002_create_pet_table;
mod m20260810_000003_create_adoption_table;
mod m20260810_000004_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_user_table::Migration),
            Box::new(m20260810_000002_create_pet_table::Migration),
            Box::new(m20260810_000003_create_adoption_table::Migration),
            Box::new(m20260810_000004_create_notification_table::Migration),
        ]
    }
}
