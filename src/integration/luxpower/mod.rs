//! LuxPower Integration Module
//! The integration is done via the LuxPower web portal form/JSON API.
mod client;
mod error;
mod http_client;
mod schemas;
mod session_jar;

pub use client::Client;
pub use error::{Error, Result};
pub use schemas::TelemetrySnapshot;
