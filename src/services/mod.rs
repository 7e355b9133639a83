//! Services module.
mod inverter_sync;

pub use inverter_sync::InverterSync;
