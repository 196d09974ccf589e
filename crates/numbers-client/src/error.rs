use thiserror::Error;

/// Errors that can occur while fetching a fact.
#[derive(Debug, Error)]
pub enum FactError {
    /// Request could not be built or sent (bad URL, connection failure)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body could not be read
    #[error("Failed to read response body from '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
