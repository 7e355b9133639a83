//! Application configuration loaded from environment variables.
use std::env;

use envconfig::Envconfig;
use reqwest::Url;
use thiserror::Error;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Variables that must be present and non-blank.
const REQUIRED_VARS: [&str; 5] = [
    "ACCOUNT_NAME",
    "ACCOUNT_PASSWORD",
    "STATION_NUMBER",
    "LUXPOWER_URL",
    "DATABASE_URL",
];

#[derive(Envconfig)]
pub struct Config {
    #[envconfig(from = "APP_LOG", default = "info")]
    pub app_log: String,
    #[envconfig(from = "APP_LOG_STYLE", default = "always")]
    pub app_log_style: String,
    #[envconfig(from = "ACCOUNT_NAME")]
    pub account_name: String,
    #[envconfig(from = "ACCOUNT_PASSWORD")]
    pub account_password: String,
    #[envconfig(from = "STATION_NUMBER")]
    pub station_number: String,
    #[envconfig(from = "LUXPOWER_URL")]
    pub luxpower_url: Url,
    #[envconfig(from = "DATABASE_URL")]
    pub database_url: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    Missing(&'static str),
    #[error("Failed to parse environment variable: {0}")]
    Invalid(&'static str),
}

impl From<envconfig::Error> for ConfigError {
    fn from(err: envconfig::Error) -> Self {
        match err {
            envconfig::Error::EnvVarMissing { name } => ConfigError::Missing(name),
            envconfig::Error::ParseError { name } => ConfigError::Invalid(name),
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment.
    /// Blank values count as missing, non-UTF-8 values as invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        for name in REQUIRED_VARS {
            match env::var(name) {
                Ok(value) if !value.trim().is_empty() => {}
                Err(env::VarError::NotUnicode(_)) => return Err(ConfigError::Invalid(name)),
                _ => return Err(ConfigError::Missing(name)),
            }
        }
        let config = Self::init_from_env()?;
        if config.luxpower_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid("LUXPOWER_URL"));
        }
        Ok(config)
    }
}

pub fn configure_logger() {
    let env = env_logger::Env::default()
        .filter_or("APP_LOG", "info")
        .write_style_or("APP_LOG_STYLE", "always");
    env_logger::init_from_env(env);
}
