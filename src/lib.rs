//! luxsync - Store LuxPower inverter telemetry in TimescaleDB.
pub mod core;
pub mod integration;
pub mod services;
pub mod storage;

pub use crate::core::app::app;
