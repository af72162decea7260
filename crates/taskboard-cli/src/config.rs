//! JSON configuration file.
//!
//! ```json
//! {
//!   "database": { "name": "projects.db" },
//!   "server": { "host": "127.0.0.1", "port": 5000, "static_dir": "static" }
//! }
//! ```
//!
//! Every key is optional. Command-line flags win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::args::ServeArgs;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file; relative paths resolve against the working directory
    pub name: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn apply(&mut self, args: ServeArgs) {
        if let Some(host) = args.host {
            self.host = host;
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if args.static_dir.is_some() {
            self.static_dir = args.static_dir;
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Loads `explicit` if given, else `./config.json` if it exists, else
    /// the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    debug!("No configuration file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"database": {{"name": "projects.db"}}}}"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.database.name, Some(PathBuf::from("projects.db")));
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut server: ServerConfig = serde_json::from_str(
            r#"{"host": "0.0.0.0", "port": 8000, "static_dir": "static"}"#,
        )
        .unwrap();

        server.apply(ServeArgs {
            host: None,
            port: Some(9000),
            static_dir: None,
        });

        assert_eq!(server.address(), "0.0.0.0:9000");
        assert_eq!(server.static_dir, Some(PathBuf::from("static")));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/taskboard.json"))).is_err());
    }
}
