//! Dependency injection container for luxsync.

use std::sync::Arc;

use super::Result;
use super::config::Config;
use crate::integration::luxpower;
use crate::services;
use crate::storage::{self, DbPool};

/// Container for application dependencies.
/// Owns the HTTP session and the storage pool for the lifetime of a run.
pub struct Container {
    config: Arc<Config>,
    pool: DbPool,
    inverter_sync: Arc<services::InverterSync>,
}

impl Container {
    /// Connects to storage, bootstraps the schema and builds the clients.
    pub async fn init(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let pool = storage::connect(&config.database_url).await?;
        let report = storage::migrate(&pool).await?;
        log::debug!("Schema bootstrap done: {report:?}");

        let luxpower = luxpower::Client::new(
            config.luxpower_url.clone(),
            config.account_name.clone(),
            config.account_password.clone(),
            config.station_number.clone(),
        )?;

        let inverter_sync = Arc::new(services::InverterSync::new(
            Arc::new(luxpower),
            pool.clone(),
            config.station_number.clone(),
        ));

        Ok(Self {
            config,
            pool,
            inverter_sync,
        })
    }

    /// Returns a reference to the application config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a reference to the inverter sync service.
    pub fn inverter_sync(&self) -> Arc<services::InverterSync> {
        Arc::clone(&self.inverter_sync)
    }

    /// Shutdown the container and close the storage pool.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}
