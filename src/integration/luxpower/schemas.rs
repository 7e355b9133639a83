//! LuxPower API Schemas
//! The schemas module defines the data structures returned by the LuxPower API.
use serde::Deserialize;
use serde_json::json;

/// One instantaneous reading of the inverter power flows, in watts.
/// The battery charge is a percentage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TelemetrySnapshot {
    #[serde(rename = "ppv1")]
    pub pv1: i32,
    #[serde(rename = "ppv2")]
    pub pv2: i32,
    #[serde(rename = "ppv3")]
    pub pv3: i32,
    #[serde(rename = "ppv")]
    pub pv_total: i32,
    #[serde(rename = "pCharge")]
    pub inverter_to_battery: i32,
    #[serde(rename = "pDisCharge")]
    pub battery_to_inverter: i32,
    #[serde(rename = "soc")]
    pub battery_charge_percent: i32,
    #[serde(rename = "pinv")]
    pub inverter_to_load: i32,
    #[serde(rename = "pToUser")]
    pub grid_to_load: i32,
    #[serde(rename = "pToGrid")]
    pub inverter_to_grid: i32,
}

impl TelemetrySnapshot {
    /// Total power consumed by the load, from the inverter and the grid.
    /// Widened so that two `i32` readings never overflow.
    pub fn load(&self) -> i64 {
        i64::from(self.inverter_to_load) + i64::from(self.grid_to_load)
    }

    /// Renders the snapshot with descriptive key names, for logging.
    pub fn to_display_json(&self) -> String {
        json!({
            "PhotoVoltaic1Watts": self.pv1,
            "PhotoVoltaic2Watts": self.pv2,
            "PhotoVoltaic3Watts": self.pv3,
            "PhotoVoltaicTotalWatts": self.pv_total,
            "InverterToBattery": self.inverter_to_battery,
            "BatteryToInverter": self.battery_to_inverter,
            "BatteryChargePercent": self.battery_charge_percent,
            "InverterToLoad": self.inverter_to_load,
            "GridToLoad": self.grid_to_load,
            "InverterToGrid": self.inverter_to_grid,
        })
        .to_string()
    }
}
