//! Error handling for the LuxPower API client.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Authentication failed: no session cookie received")]
    NoSession,

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
    #[error("Cookie store setup failed: {0}")]
    CookieStore(String),

    #[error("Response JSON error: {0}")]
    ResponseJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
