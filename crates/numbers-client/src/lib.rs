//! Numbers fact client
//!
//! This crate provides a trait-based client for a numbers trivia service
//! (`GET {base_url}/{number}` returning a plain text fact).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        FactClient trait      │
//! │  - fetch_fact(number)        │
//! └──────────────────────────────┘
//!                │
//!                ▼
//!      ┌──────────────────┐
//!      │  HttpFactClient  │
//!      │  (reqwest)       │
//!      └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use numbers_client::{FactClient, HttpFactClient};
//!
//! # async fn example() -> Result<(), numbers_client::FactError> {
//! let client = HttpFactClient::new("http://numbersapi.com");
//! let fact = client.fetch_fact(42).await?;
//! println!("{fact}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;

pub use client::FactClient;
pub use error::FactError;
pub use http_client::HttpFactClient;
