//! Inverter Sync Service.
//! Fetches one live snapshot from LuxPower and stores it in TimescaleDB.
use std::sync::Arc;

use crate::core::Result;
use crate::integration::luxpower;
use crate::storage::{self, DbPool, InverterRecord};

pub struct InverterSync {
    luxpower: Arc<luxpower::Client>,
    pool: DbPool,
    station_number: String,
}

impl InverterSync {
    /// Creates a new instance of `InverterSync`.
    pub fn new(luxpower: Arc<luxpower::Client>, pool: DbPool, station_number: String) -> Self {
        InverterSync {
            luxpower,
            pool,
            station_number,
        }
    }

    /// Runs a single fetch-and-store cycle.
    /// Any failure is returned as is, nothing is retried.
    pub async fn run_once(&self) -> Result<InverterRecord> {
        log::info!("Fetching data from LuxPower");
        let snapshot = self.luxpower.fetch_live(false).await?;
        log::debug!("Live data: {}", snapshot.to_display_json());

        let record = storage::write_snapshot(&self.pool, snapshot, &self.station_number).await?;
        log::info!(
            "Stored snapshot for station {} at {} (pv {} W, load {} W, battery {}%)",
            record.station_number,
            record.time,
            snapshot.pv_total,
            record.load(),
            snapshot.battery_charge_percent
        );
        Ok(record)
    }
}
