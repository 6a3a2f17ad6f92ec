//! Remote fetching of documentation indices and individual documents.
//!
//! [`IndexFetcher`] is the seam between the resolver and the network so that
//! callers can substitute a non-networked implementation. The production
//! implementation, [`HttpFetcher`], performs blocking HTTP GETs with a shared
//! client.

use crate::docs::types::Index;
use crate::error::{DocdexError, Result};

/// Fetches index and document payloads from a documentation source.
pub trait IndexFetcher {
    /// Fetch and decode a documentation index from `url`.
    fn fetch_index(&self, url: &str) -> Result<Index>;

    /// Fetch a single document from `url`, returning the body verbatim.
    fn fetch_document(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP implementation of [`IndexFetcher`].
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a descriptive user agent.
    pub fn new() -> Self {
        let user_agent = format!(
            "{}/{} ({})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_REPOSITORY")
        );

        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .expect("Failed to create HTTP client"); // HTTP client creation should not fail with proper configuration

        Self { client }
    }

    /// GET `url` and return the raw body, enforcing a success status.
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| DocdexError::RemoteFetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocdexError::RemoteStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .map_err(|source| DocdexError::RemoteFetch {
                url: url.to_string(),
                source,
            })?;
        Ok(body.to_vec())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexFetcher for HttpFetcher {
    fn fetch_index(&self, url: &str) -> Result<Index> {
        let body = self.get_bytes(url)?;
        serde_json::from_slice(&body).map_err(|source| DocdexError::RemoteDecode {
            url: url.to_string(),
            source,
        })
    }

    fn fetch_document(&self, url: &str) -> Result<String> {
        let body = self.get_bytes(url)?;
        String::from_utf8(body).map_err(|_| DocdexError::InvalidUtf8 {
            url: url.to_string(),
        })
    }
}
