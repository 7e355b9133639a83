//! Core application wiring: configuration, container and entry point.
pub mod app;
pub mod config;
pub mod container;
mod error;

pub use error::{Error, Result};
