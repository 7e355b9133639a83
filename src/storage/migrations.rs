//! Schema bootstrap for the `inverter_data` hypertable.
//! Every statement is safe to run on each start.
use super::db::DbPool;
use super::{Error, Result};

const CREATE_EXTENSION: &str = "CREATE EXTENSION IF NOT EXISTS timescaledb";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS public.inverter_data (
        "time" TIMESTAMPTZ NOT NULL,
        station_number TEXT NOT NULL,
        battery_charge_percent INTEGER NOT NULL,
        pv_1 INTEGER NOT NULL,
        pv_2 INTEGER NOT NULL,
        pv_3 INTEGER NOT NULL,
        pv_total INTEGER NOT NULL,
        battery_charge INTEGER NOT NULL,
        battery_discharge INTEGER NOT NULL,
        inverter_to_load INTEGER NOT NULL,
        inverter_to_grid INTEGER NOT NULL,
        grid_to_load INTEGER NOT NULL,
        load INTEGER NOT NULL
    )
"#;

const COUNT_HYPERTABLES: &str = "SELECT COUNT(*) FROM timescaledb_information.hypertables WHERE hypertable_name = 'inverter_data'";

const CREATE_HYPERTABLE: &str = "SELECT create_hypertable('inverter_data', by_range('time'))";

const CREATE_UNIQUE_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS ix_inverter_time_station ON inverter_data (time, station_number)";

/// Outcome of a schema bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    /// `true` if the table was converted to a hypertable during this run.
    pub hypertable_created: bool,
}

/// Ensures the extension, table, hypertable and unique index exist.
pub async fn migrate(pool: &DbPool) -> Result<MigrationReport> {
    execute(pool, "create extension", CREATE_EXTENSION).await?;
    execute(pool, "create table", CREATE_TABLE).await?;

    let count: i64 = sqlx::query_scalar(COUNT_HYPERTABLES)
        .fetch_one(pool)
        .await
        .map_err(|source| Error::Migration {
            step: "count hypertables",
            source,
        })?;
    let hypertable_created = count == 0;
    if hypertable_created {
        log::info!("Converting inverter_data to a hypertable");
        execute(pool, "create hypertable", CREATE_HYPERTABLE).await?;
    }

    execute(pool, "create unique index", CREATE_UNIQUE_INDEX).await?;
    log::debug!("Schema is up to date");
    Ok(MigrationReport { hypertable_created })
}

async fn execute(pool: &DbPool, step: &'static str, sql: &str) -> Result<()> {
    sqlx::query(sql)
        .execute(pool)
        .await
        .map_err(|source| Error::Migration { step, source })?;
    Ok(())
}
