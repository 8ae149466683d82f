//! Module wiring and lifecycle: migrations, repositories, service, routes

use crate::domain::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{
    SeaOrmActivityRepository, SeaOrmCamperRepository, SeaOrmSignupRepository,
};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Camp service module
pub struct CampServiceModule {
    service: Arc<Service>,
}

impl CampServiceModule {
    /// Apply pending database migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Camp service migrations completed");
        Ok(())
    }

    /// Build repositories and the domain service on top of a connection
    pub fn init(db: DatabaseConnection) -> Self {
        let conn = Arc::new(db);

        let activity_repo = Arc::new(SeaOrmActivityRepository::new(conn.clone()));
        let camper_repo = Arc::new(SeaOrmCamperRepository::new(conn.clone()));
        let signup_repo = Arc::new(SeaOrmSignupRepository::new(conn));

        let service = Arc::new(Service::new(activity_repo, camper_repo, signup_repo));

        tracing::info!("Camp service initialized");
        Self { service }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Register the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering camp service REST routes");
        crate::api::rest::routes::register_routes(router, self.service())
    }
}
