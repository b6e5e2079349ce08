//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted backup settings.
///
/// Both values are opaque to the alias store; they belong to the Gist backup
/// integration.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gist_id: Option<String>,
}

impl Config {
    /// Token, if one is set and not blank
    pub fn token(&self) -> Option<&str> {
        self.github_token.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Gist id, if one is set and not blank
    pub fn gist(&self) -> Option<&str> {
        self.gist_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Load configuration from `path`, or return default if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default())
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the JSON configuration written by earlier releases,
    /// or return default if the file doesn't exist
    pub fn load_json_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default())
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_slice(&content).map_err(|source| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;

        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)
        };

        write().map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Configuration file failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write config file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.token().is_none());
        assert!(config.gist().is_none());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            github_token: Some("ghp_secret".into()),
            gist_id: Some("abc123".into()),
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config: Config = toml::from_str("github_token = \"  \"\ngist_id = \"\"\n").unwrap();
        assert!(config.token().is_none());
        assert!(config.gist().is_none());
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".bash_alias_manager.json");
        std::fs::write(&path, "{\"github_token\":\"ghp_legacy\",\"gist_id\":\"0ddba11\"}\n").unwrap();

        let config = Config::load_json_from(&path).unwrap();
        assert_eq!(config.token(), Some("ghp_legacy"));
        assert_eq!(config.gist(), Some("0ddba11"));
    }

    #[test]
    fn test_json_config_with_empty_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".bash_alias_manager.json");
        std::fs::write(&path, "{\"github_token\":\"\",\"gist_id\":\"\"}\n").unwrap();

        let config = Config::load_json_from(&path).unwrap();
        assert!(config.token().is_none());
        assert!(config.gist().is_none());
        assert!(Config::load_json_from(&dir.path().join("absent.json"))
            .unwrap()
            .token()
            .is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "github_token = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
