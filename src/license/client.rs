/// HTTP access to the licenses API.
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::errors::LicenseError;
use super::model::{LicenseDetail, LicenseSummary};

/// Default collection endpoint.
pub const DEFAULT_API_URI: &str = "https://api.github.com/licenses";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where license metadata comes from.
pub trait LicenseSource {
    /// Fetch every available license summary, in API order.
    ///
    /// # Errors
    ///
    /// `Network`, `Api` or `Decode` depending on where the request failed.
    fn list(&self) -> Result<Vec<LicenseSummary>, LicenseError>;

    /// Fetch one license by key. The key is used as the path segment verbatim.
    ///
    /// # Errors
    ///
    /// `Network`, `Api` or `Decode` depending on where the request failed.
    fn detail(&self, key: &str) -> Result<LicenseDetail, LicenseError>;
}

/// Blocking client for a GitHub-compatible `/licenses` endpoint.
pub struct HttpLicenseSource {
    client: Client,
    base_uri: String,
}

impl HttpLicenseSource {
    /// Build a client for `base_uri`, which must not end in `/`. `timeout`
    /// bounds each request; `None` leaves the transport default in place.
    ///
    /// # Errors
    ///
    /// Returns `LicenseError::Network` if the TLS backend cannot be initialised.
    pub fn new(base_uri: &str, timeout: Option<Duration>) -> Result<Self, LicenseError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_uri: base_uri.to_owned(),
        })
    }

    fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, LicenseError> {
        debug!(url, "sending request");
        let response = self.client.get(url).send()?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "received response");

        if status != StatusCode::OK {
            let (body, read_error) = match response.text() {
                Ok(body) => (body, None),
                Err(e) => (String::new(), Some(e.to_string())),
            };
            debug!(url, status = status.as_u16(), "api returned an error status");
            return Err(LicenseError::Api {
                status: status.as_u16(),
                body,
                read_error,
            });
        }

        let body = response.text()?;
        decode(&body)
    }
}

/// Decode the first JSON value in `body`; anything after it is ignored.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, LicenseError> {
    match serde_json::Deserializer::from_str(body).into_iter::<T>().next() {
        Some(value) => Ok(value?),
        // Empty body: let the plain parser produce the EOF error.
        None => Ok(serde_json::from_str(body)?),
    }
}

impl LicenseSource for HttpLicenseSource {
    fn list(&self) -> Result<Vec<LicenseSummary>, LicenseError> {
        let licenses: Vec<LicenseSummary> = self.fetch(&self.base_uri)?;
        debug!(count = licenses.len(), "decoded license list");
        Ok(licenses)
    }

    fn detail(&self, key: &str) -> Result<LicenseDetail, LicenseError> {
        let url = format!("{}/{key}", self.base_uri);
        let detail: LicenseDetail = self.fetch(&url)?;
        debug!(key = detail.key.as_str(), "decoded license detail");
        Ok(detail)
    }
}
