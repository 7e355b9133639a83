//! Error handling for the storage layer.
use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("Migration failed at '{step}': {source}")]
    Migration {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("Record already exists for station {station_number} at {time}")]
    DuplicateRecord {
        station_number: String,
        time: DateTime<Utc>,
    },
    #[error("Load {load} W of station {station_number} does not fit the load column")]
    LoadOutOfRange { station_number: String, load: i64 },
    #[error("Insert failed: {0}")]
    Write(#[source] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
