// src/core/net.rs
// Blocking HTTP GET, one page at a time.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::{ REQUEST_TIMEOUT_SECS, USER_AGENT };
use crate::error::FetchError;

/// Source of page markup by address.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|source| FetchError::Http { url: s!(), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");
        let http = |source| FetchError::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(http)
    }
}
