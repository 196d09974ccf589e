//! Configuration and file management for counter-tca
//!
//! This crate provides:
//! - File path utilities for the cache directory (log files)
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, load_config_file_from};
pub use paths::cache_dir;
