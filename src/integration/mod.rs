//! Integrations with external systems.
pub mod luxpower;
