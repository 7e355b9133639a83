//! LuxPower HTTP client.
//! This is the lower level client for the LuxPower web portal.
//! The session is kept in a cookie jar and redirects are never followed.
use reqwest::cookie::CookieStore;
use reqwest::{Client, Url, redirect};
use std::sync::Arc;

use super::session_jar::SessionJar;
use super::{Error, Result};

static LOGIN_PATH: &str = "web/login";
static RUNTIME_PATH: &str = "api/inverter/getInverterRuntime";

pub struct HttpClient {
    client: Client,
    jar: Arc<SessionJar>,
    base_url: Url,
    login_url: Url,
    runtime_url: Url,
    account: String,
    password: String,
}

impl HttpClient {
    /// Creates a new instance of `HttpClient` with an empty cookie jar.
    pub fn new(url: Url, account: String, password: String) -> Result<Self> {
        let jar = Arc::new(SessionJar::new()?);
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(HttpClient {
            client,
            jar,
            login_url: endpoint(&url, LOGIN_PATH)?,
            runtime_url: endpoint(&url, RUNTIME_PATH)?,
            base_url: url,
            account,
            password,
        })
    }

    /// Returns `true` if the jar holds a cookie for the base URL.
    pub fn has_session(&self) -> bool {
        self.jar.cookies(&self.base_url).is_some()
    }

    /// Posts the account credentials to the login form.
    /// The login is successful only if the server sets a session cookie.
    pub async fn login(&self) -> Result<()> {
        log::debug!("Sending login request for account '{}'", self.account);
        let params = [
            ("account", self.account.as_str()),
            ("password", self.password.as_str()),
        ];
        self.client
            .post(self.login_url.clone())
            .form(&params)
            .send()
            .await?
            .error_for_status()?;
        if self.has_session() {
            log::debug!("Login successful");
            Ok(())
        } else {
            log::debug!("Login failed: no session cookie received");
            Err(Error::NoSession)
        }
    }

    /// Requests the live runtime data of an inverter and returns the raw body.
    pub async fn request_runtime(&self, serial_number: &str) -> Result<String> {
        log::debug!("Sending runtime request for inverter {serial_number}");
        let response = self
            .client
            .post(self.runtime_url.clone())
            .form(&[("serialNum", serial_number)])
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        log::debug!("Runtime result: {text}");
        Ok(text)
    }
}

/// Appends a relative path to the base URL, keeping any path prefix.
fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(path.split('/'));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_endpoint_from_root() {
        let login = endpoint(&url("https://eu.luxpowertek.com"), LOGIN_PATH).unwrap();
        assert_eq!(login.as_str(), "https://eu.luxpowertek.com/web/login");
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let runtime = endpoint(&url("http://localhost:8080/portal/"), RUNTIME_PATH).unwrap();
        assert_eq!(
            runtime.as_str(),
            "http://localhost:8080/portal/api/inverter/getInverterRuntime"
        );
        let runtime = endpoint(&url("http://localhost:8080/portal"), RUNTIME_PATH).unwrap();
        assert_eq!(
            runtime.as_str(),
            "http://localhost:8080/portal/api/inverter/getInverterRuntime"
        );
    }

    #[test]
    fn test_endpoint_cannot_be_a_base() {
        let result = endpoint(&url("mailto:someone@example.com"), LOGIN_PATH);
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_new_without_session() {
        let client = HttpClient::new(
            url("http://localhost:8080"),
            "user".to_string(),
            "password".to_string(),
        )
        .unwrap();
        assert!(!client.has_session());
    }

    #[test]
    fn test_has_session_after_cookie_set() {
        let client = HttpClient::new(
            url("http://localhost:8080"),
            "user".to_string(),
            "password".to_string(),
        )
        .unwrap();
        let header =
            reqwest::header::HeaderValue::from_static("JSESSIONID=0123456789ABCDEF; Path=/");
        client.jar.set_cookies(
            &mut std::iter::once(&header),
            &url("http://localhost:8080/web/login"),
        );
        assert!(client.has_session());
    }
}
