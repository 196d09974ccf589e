//! reqwest-based fact client
//!
//! Direct implementation of the `FactClient` trait. No timeout, no retry and
//! no status-code check: whatever body the service returns is the fact.

use crate::client::FactClient;
use crate::error::FactError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

/// Fact client that issues `GET {base_url}/{number}`
#[derive(Debug, Clone)]
pub struct HttpFactClient {
    client: Client,
    base_url: String,
}

impl HttpFactClient {
    /// Create a new client with a default reqwest client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a new client around an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for the fact about `number`
    pub fn fact_url(&self, number: i64) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), number)
    }
}

#[async_trait]
impl FactClient for HttpFactClient {
    async fn fetch_fact(&self, number: i64) -> Result<String, FactError> {
        let url = self.fact_url(number);
        debug!("Fetching fact from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FactError::Request {
                url: url.clone(),
                source,
            })?;

        debug!("Fact response status: {}", response.status());

        let body = response
            .bytes()
            .await
            .map_err(|source| FactError::Body {
                url: url.clone(),
                source,
            })?;

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
