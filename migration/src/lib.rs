pub use sea_orm_migration::prelude::*;

mod m20241111_000001_create_reference_tables;
mod m20241111_000002_create_movie_tables;
mod m20241111_000003_add_reference_details;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241111_000001_create_reference_tables::Migration),
            Box::new(m20241111_000002_create_movie_tables::Migration),
            Box::new(m20241111_000003_add_reference_details::Migration),
        ]
    }
}
