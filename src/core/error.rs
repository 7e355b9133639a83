//! Application error, one variant per pipeline stage.
use super::config::ConfigError;
use crate::integration::luxpower;
use crate::storage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("LuxPower error: {0}")]
    Luxpower(#[from] luxpower::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] storage::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
