//! Fact client trait
//!
//! Implementations can hit the real service or be stubbed out in tests.

use crate::error::FactError;
use async_trait::async_trait;

/// Client for fetching a trivia fact about an integer
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// across concurrently running fetch tasks.
#[async_trait]
pub trait FactClient: Send + Sync {
    /// Fetch the fact text for `number`
    ///
    /// The returned text is treated opaquely by callers.
    async fn fetch_fact(&self, number: i64) -> Result<String, FactError>;
}
