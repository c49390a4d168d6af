use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{remote, search};
use crate::error::{Error, Result};

/// Top-level configuration, read from `maisearch.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub aliases: AliasConfig,
    pub remote: RemoteConfig,
    pub covers: CoverConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("music_data.json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    /// Local alias file; no local aliases when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    pub alias_endpoint: String,
    pub cover_endpoint: String,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            alias_endpoint: remote::ALIAS_ENDPOINT.to_string(),
            cover_endpoint: remote::COVER_ENDPOINT.to_string(),
            timeout_secs: remote::TIMEOUT.as_secs(),
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Directory holding `<id>.png` jackets, checked before the remote service
    pub dir: PathBuf,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("covers"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub page_size: usize,
    pub too_many_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: search::SONGS_PER_PAGE,
            too_many_threshold: search::TOO_MANY_THRESHOLD,
        }
    }
}

impl Config {
    /// Parse configuration from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }

    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let content = r#"
[catalog]
path = "data/music_data.json"

[search]
page_size = 10
"#;
        let config = Config::parse(content).unwrap();

        assert_eq!(config.catalog.path, PathBuf::from("data/music_data.json"));
        assert_eq!(config.search.page_size, 10);
        assert_eq!(config.search.too_many_threshold, 50);
        assert!(config.remote.enabled);
        assert!(config.aliases.path.is_none());
    }

    #[test]
    fn test_parse_remote_section() {
        let content = r#"
[remote]
enabled = false
alias_endpoint = "http://localhost:8080"
timeout_secs = 0
"#;
        let config = Config::parse(content).unwrap();

        assert!(!config.remote.enabled);
        assert_eq!(config.remote.alias_endpoint, "http://localhost:8080");
        assert_eq!(config.remote.cover_endpoint, remote::COVER_ENDPOINT);
        assert_eq!(config.remote.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::parse("[search]\npage_size = \"ten\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParseError(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maisearch.toml");
        fs::write(&path, "[aliases]\npath = \"aliases.json\"\n").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.aliases.path, Some(PathBuf::from("aliases.json")));
    }
}
