//! Cache directory path
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.cache/counter-tca/`
//! - macOS: `~/Library/Caches/counter-tca/`
//! - Windows: `%LOCALAPPDATA%\counter-tca\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "counter-tca";

/// Get the application cache directory, creating it if missing
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create cache directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        // Sandboxed CI may not expose a cache directory at all
        if let Ok(dir) = cache_dir() {
            assert!(dir.exists());
            assert!(dir.ends_with(APP_NAME));
        }
    }
}
