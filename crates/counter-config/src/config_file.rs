//! Config file discovery
//!
//! `.counter-tca.toml` is looked up in the working directory first, then in
//! the home directory. The first readable file wins.

use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".counter-tca.toml";

/// Directories searched by `load_config_file`, in priority order
pub fn search_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home);
    }
    candidates
}

/// Read the first config file found in the default search dirs
pub fn load_config_file() -> Option<(PathBuf, String)> {
    load_config_file_from(&search_dirs())
}

/// Read the first `.counter-tca.toml` found in `candidates`
///
/// Returns the path that was read together with its content.
pub fn load_config_file_from(candidates: &[PathBuf]) -> Option<(PathBuf, String)> {
    candidates
        .iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| read_config(&path).map(|content| (path, content)))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Skipping unreadable config {}: {}", path.display(), e);
            None
        }
    }
}
