//! Database migrations for camp service

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_activities;
mod m20250101_000002_create_campers;
mod m20250101_000003_create_signups;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_activities::Migration),
            Box::new(m20250101_000002_create_campers::Migration),
            Box::new(m20250101_000003_create_signups::Migration),
        ]
    }
}
