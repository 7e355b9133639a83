//! LuxPower Client.
//! This client is the higher level API client for LuxPower.
use super::http_client::HttpClient;
use super::schemas::TelemetrySnapshot;
use super::Result;
use reqwest::Url;

pub struct Client {
    http: HttpClient,
    station_number: String,
}

impl Client {
    /// Creates a new instance of `Client` for one inverter station.
    pub fn new(
        url: Url,
        account: String,
        password: String,
        station_number: String,
    ) -> Result<Self> {
        let http = HttpClient::new(url, account, password)?;
        Ok(Client {
            http,
            station_number,
        })
    }

    /// Login to the LuxPower portal.
    pub async fn authenticate(&self) -> Result<()> {
        self.http.login().await
    }

    /// Returns `true` if a session cookie is held for the portal.
    pub fn has_session(&self) -> bool {
        self.http.has_session()
    }

    /// Get the live inverter readings.
    /// Logs in first if there is no session yet.
    /// In test mode a zero-valued snapshot is returned without any request.
    pub async fn fetch_live(&self, test_mode: bool) -> Result<TelemetrySnapshot> {
        if test_mode {
            return Ok(TelemetrySnapshot::default());
        }
        if !self.has_session() {
            self.authenticate().await?;
        }
        let body = self.http.request_runtime(&self.station_number).await?;
        Self::parse_snapshot(&body)
    }

    /// Decode a runtime response body.
    fn parse_snapshot(body: &str) -> Result<TelemetrySnapshot> {
        Ok(serde_json::from_str(body)?)
    }
}
