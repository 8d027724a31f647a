pub use sea_orm_migration::prelude::*;

mod m20250612_000001_create_tables;
mod m20250720_000001_create_judge_instances;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_000001_create_tables::Migration),
            Box::new(m20250720_000001_create_judge_instances::Migration),
        ]
    }
}
