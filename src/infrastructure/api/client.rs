//! HTTP client bound to the application origin.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::domain::errors::{ServiceError, StartupError};

const USER_AGENT: &str = concat!("fidelity/", env!("CARGO_PKG_VERSION"));

/// HTTP client whose base address is the origin the application is served from.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for `origin`.
    ///
    /// Any path, query or fragment on `origin` is discarded; only scheme,
    /// host and port are kept.
    ///
    /// # Errors
    /// Returns error if the origin is not an absolute http(s) URL or the HTTP
    /// client cannot be created.
    pub fn new(origin: &str) -> Result<Self, StartupError> {
        let base_url = Self::origin_base(origin)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StartupError::HttpClient(e.to_string()))?;

        debug!(base_url = %base_url, "Created API client");
        Ok(Self { client, base_url })
    }

    fn origin_base(origin: &str) -> Result<Url, StartupError> {
        let parsed =
            Url::parse(origin).map_err(|e| StartupError::invalid_origin(origin, e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(StartupError::invalid_origin(
                origin,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let serialized = parsed.origin().ascii_serialization();
        Url::parse(&format!("{serialized}/"))
            .map_err(|e| StartupError::invalid_origin(origin, e.to_string()))
    }

    /// Returns the base address, always ending in `/`.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a path relative to the origin.
    ///
    /// # Errors
    /// Returns `InvalidPath` if the path cannot be joined or leaves the origin.
    pub fn url(&self, path: &str) -> Result<Url, ServiceError> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| ServiceError::InvalidPath {
                path: path.to_string(),
            })?;

        if url.origin() != self.base_url.origin() {
            return Err(ServiceError::InvalidPath {
                path: path.to_string(),
            });
        }
        Ok(url)
    }

    /// Performs a GET and decodes the JSON body.
    ///
    /// # Errors
    /// Returns error on transport failure, non-success status or an
    /// undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ServiceError> {
        debug!(url = %url, "GET");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(error = %e, url = %url, "Request failed");
            if e.is_timeout() {
                ServiceError::network("request timed out")
            } else if e.is_connect() {
                ServiceError::network(format!("failed to connect to {}", self.base_url))
            } else {
                ServiceError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, url = %url, "Unexpected response status");
            return Err(ServiceError::Status {
                path: url.path().to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, url = %url, "Failed to decode response");
            ServiceError::Decode {
                path: url.path().to_string(),
                message: e.to_string(),
            }
        })
    }
}
