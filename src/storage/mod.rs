//! TimescaleDB storage for inverter snapshots.
mod db;
mod error;
mod migrations;

pub use db::{DbPool, InverterRecord, connect, insert_record, write_snapshot};
pub use error::{Error, Result};
pub use migrations::{MigrationReport, migrate};
