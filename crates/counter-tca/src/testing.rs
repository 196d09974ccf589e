//! Test doubles shared by the unit tests

use async_trait::async_trait;
use numbers_client::{FactClient, FactError, HttpFactClient};
use std::sync::Mutex;

/// Fact client that answers instantly and records every requested number
#[derive(Default)]
pub struct StubFactClient {
    calls: Mutex<Vec<i64>>,
}

impl StubFactClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FactClient for StubFactClient {
    async fn fetch_fact(&self, number: i64) -> Result<String, FactError> {
        self.calls.lock().unwrap().push(number);
        Ok(format!("{} is a number.", number))
    }
}

/// Fact client whose every request fails before reaching the network
pub struct FailingFactClient {
    inner: HttpFactClient,
    calls: Mutex<Vec<i64>>,
}

impl FailingFactClient {
    pub fn new() -> Self {
        Self {
            inner: HttpFactClient::new("not a url"),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FactClient for FailingFactClient {
    async fn fetch_fact(&self, number: i64) -> Result<String, FactError> {
        self.calls.lock().unwrap().push(number);
        self.inner.fetch_fact(number).await
    }
}
