//! Server configuration
//!
//! All configuration comes from environment variables read once at
//! startup.

use std::path::PathBuf;

/// Which store backend to wire in at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the tasks JSON file (file backend only)
    pub data_dir: PathBuf,
    /// Port for the REST API
    pub port: u16,
    pub backend: StoreBackend,
}

impl Config {
    /// Read configuration from the environment
    ///
    /// `TM_DATA_DIR` defaults to `.tm-data`, `TM_PORT` to 8081 and
    /// `TM_STORE` to `file`. Unrecognized values fall back to the
    /// defaults.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("TM_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".tm-data"));

        let port = std::env::var("TM_PORT")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(8081);

        let backend = match std::env::var("TM_STORE") {
            Ok(raw) if raw.trim().eq_ignore_ascii_case("memory") => StoreBackend::Memory,
            _ => StoreBackend::File,
        };

        Self {
            data_dir,
            port,
            backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Tests do not set TM_* variables
        let config = Config::from_env();
        assert_eq!(config.data_dir, PathBuf::from(".tm-data"));
        assert_eq!(config.port, 8081);
        assert_eq!(config.backend, StoreBackend::File);
    }
}
