//! Configuration management module
//!
//! Settings live in `<home>/.bash_alias_manager.toml`. When that file is
//! absent, the JSON file written by earlier releases is read instead; the
//! next save writes TOML.

use std::path::PathBuf;
use tracing::debug;

use crate::model::{Config, ConfigError};
use crate::utils::path::Home;

/// File the configuration under `home` is read from
pub fn config_source(home: &Home) -> PathBuf {
    let path = home.config_file();
    let legacy = home.legacy_config_file();
    if !path.exists() && legacy.exists() {
        legacy
    } else {
        path
    }
}

/// Load the configuration stored under `home`, or the default when absent
pub fn load_or_default(home: &Home) -> Result<Config, ConfigError> {
    let path = config_source(home);
    debug!("loading config from {}", path.display());
    if path == home.legacy_config_file() {
        Config::load_json_from(&path)
    } else {
        Config::load_from(&path)
    }
}

/// Save configuration under `home`
pub fn save_config(home: &Home, config: &Config) -> Result<(), ConfigError> {
    let path = home.config_file();
    debug!("saving config to {}", path.display());
    config.save_to(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let home = Home::new(dir.path());
        assert_eq!(load_or_default(&home).unwrap(), Config::default());
        assert_eq!(config_source(&home), home.config_file());
    }

    #[test]
    fn test_falls_back_to_json_config() {
        let dir = tempdir().unwrap();
        let home = Home::new(dir.path());
        std::fs::write(
            home.legacy_config_file(),
            "{\"github_token\":\"ghp_legacy\",\"gist_id\":\"0ddba11\"}\n",
        )
        .unwrap();

        let config = load_or_default(&home).unwrap();
        assert_eq!(config.gist(), Some("0ddba11"));
        assert_eq!(config_source(&home), home.legacy_config_file());

        save_config(&home, &config).unwrap();
        assert_eq!(config_source(&home), home.config_file());
        assert_eq!(load_or_default(&home).unwrap(), config);
    }

    #[test]
    fn test_toml_config_wins() {
        let dir = tempdir().unwrap();
        let home = Home::new(dir.path());
        std::fs::write(home.legacy_config_file(), "{\"gist_id\":\"old\"}").unwrap();
        std::fs::write(home.config_file(), "gist_id = \"new\"\n").unwrap();

        assert_eq!(load_or_default(&home).unwrap().gist(), Some("new"));
    }
}
