//! Core application logic for luxsync
use super::Result;
use super::config::{APP_NAME, APP_VERSION, Config};
use super::container::Container;

/// Runs one fetch-and-store cycle with the configuration from the environment.
pub async fn app() -> Result<()> {
    let config = Config::from_env()?;
    let container = Container::init(config).await?;

    log::info!(
        "{APP_NAME} (v{APP_VERSION}) started for station {}",
        container.config().station_number
    );
    let result = container.inverter_sync().run_once().await;
    container.shutdown().await;
    result?;
    log::info!("{APP_NAME} finished");
    Ok(())
}
