pub mod config;
pub mod controllers;
pub mod database;
pub mod models;
pub mod reservation;
pub mod services;

use std::sync::Arc;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::connect(&config.database).await?;

        db.run_migrations().await?;
        tracing::info!("Database migrations applied");

        Ok(Arc::new(Self { db, config }))
    }
}
