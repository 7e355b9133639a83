use chrono::{DateTime, SubsecRound, Utc};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

use super::{Error, Result};
use crate::integration::luxpower::TelemetrySnapshot;

pub type DbPool = Pool<Postgres>;

type SnapshotField = fn(&TelemetrySnapshot) -> i32;

/// Snapshot columns of `inverter_data`, in bind order after `time` and
/// `station_number`. The derived `load` column is bound last.
const SNAPSHOT_COLUMNS: [(&str, SnapshotField); 10] = [
    ("battery_charge_percent", |s| s.battery_charge_percent),
    ("pv_1", |s| s.pv1),
    ("pv_2", |s| s.pv2),
    ("pv_3", |s| s.pv3),
    ("pv_total", |s| s.pv_total),
    ("battery_charge", |s| s.inverter_to_battery),
    ("battery_discharge", |s| s.battery_to_inverter),
    ("inverter_to_load", |s| s.inverter_to_load),
    ("inverter_to_grid", |s| s.inverter_to_grid),
    ("grid_to_load", |s| s.grid_to_load),
];

/// Builds the insert statement from the column table so names and
/// placeholders cannot drift apart.
fn insert_sql() -> String {
    let columns: Vec<&str> = ["time", "station_number"]
        .into_iter()
        .chain(SNAPSHOT_COLUMNS.iter().map(|(name, _)| *name))
        .chain(["load"])
        .collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO inverter_data ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Opens the storage pool. A single connection is enough for one run.
pub async fn connect(url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(url)
        .await
        .map_err(Error::Connection)?;
    Ok(pool)
}

/// A snapshot tagged with its capture time and station.
#[derive(Debug, Clone, PartialEq)]
pub struct InverterRecord {
    pub time: DateTime<Utc>,
    pub station_number: String,
    pub snapshot: TelemetrySnapshot,
}

impl InverterRecord {
    /// Tags the snapshot with the current time, truncated to the
    /// microsecond precision of `TIMESTAMPTZ`.
    pub fn capture(snapshot: TelemetrySnapshot, station_number: &str) -> Self {
        InverterRecord {
            time: Utc::now().trunc_subsecs(6),
            station_number: station_number.to_string(),
            snapshot,
        }
    }

    pub fn load(&self) -> i64 {
        self.snapshot.load()
    }

    /// Column values in bind order, ending with the derived load.
    /// Fails if the load does not fit an `INTEGER` column.
    pub fn column_values(&self) -> Result<Vec<(&'static str, i32)>> {
        let load = i32::try_from(self.load()).map_err(|_| Error::LoadOutOfRange {
            station_number: self.station_number.clone(),
            load: self.load(),
        })?;
        let mut values: Vec<(&'static str, i32)> = SNAPSHOT_COLUMNS
            .iter()
            .map(|(name, field)| (*name, field(&self.snapshot)))
            .collect();
        values.push(("load", load));
        Ok(values)
    }
}

/// Inserts one record. An existing `(time, station_number)` is rejected.
pub async fn insert_record(pool: &DbPool, record: &InverterRecord) -> Result<()> {
    let values = record.column_values()?;
    let sql = insert_sql();
    let mut query = sqlx::query(&sql)
        .bind(record.time)
        .bind(&record.station_number);
    for (_, value) in values {
        query = query.bind(value);
    }
    query.execute(pool).await.map_err(|err| match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            Error::DuplicateRecord {
                station_number: record.station_number.clone(),
                time: record.time,
            }
        }
        err => Error::Write(err),
    })?;
    Ok(())
}

/// Captures the snapshot at the current time and stores it.
pub async fn write_snapshot(
    pool: &DbPool,
    snapshot: TelemetrySnapshot,
    station_number: &str,
) -> Result<InverterRecord> {
    let record = InverterRecord::capture(snapshot, station_number);
    insert_record(pool, &record).await?;
    Ok(record)
}
