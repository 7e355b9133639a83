//! Session cookie jar.
//! Cookies whose `Domain` is a public suffix (e.g. `com`, `co.uk`) are rejected.
use cookie_store::RawCookie;
use publicsuffix::List;
use reqwest::Url;
use reqwest::cookie::CookieStore;
use reqwest::header::HeaderValue;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use super::{Error, Result};

static PUBLIC_SUFFIX_LIST: &str = include_str!("../../../data/public_suffix_list.dat");

pub struct SessionJar(RwLock<cookie_store::CookieStore>);

impl SessionJar {
    /// Creates an empty jar scoped by the bundled public suffix list.
    pub fn new() -> Result<Self> {
        let list = List::from_str(PUBLIC_SUFFIX_LIST)
            .map_err(|e| Error::CookieStore(e.to_string()))?;
        let store = cookie_store::CookieStore::default().with_suffix_list(list);
        Ok(SessionJar(RwLock::new(store)))
    }
}

impl CookieStore for SessionJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let cookies = cookie_headers
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| RawCookie::parse(value.to_string()).ok());
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .store_response_cookies(cookies, url);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let header = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get_request_values(url)
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        if header.is_empty() {
            return None;
        }
        HeaderValue::from_str(&header).ok()
    }
}
