//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/petstore-bdd/`
//! - macOS: `~/Library/Application Support/petstore-bdd/`
//! - Windows: `%APPDATA%\petstore-bdd\`

use std::path::PathBuf;

/// Name of the application directory
const APP_NAME: &str = "petstore-bdd";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_toml() {
        if let Some(path) = config_path() {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("toml"));
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }
}
