//! Path utilities

use std::path::{Path, PathBuf};

/// File name of the alias file inside the home directory
pub const ALIAS_FILE_NAME: &str = ".bash_aliases";
/// File name of the bash startup file inside the home directory
pub const STARTUP_FILE_NAME: &str = ".bashrc";
/// File name of the backup configuration inside the home directory
pub const CONFIG_FILE_NAME: &str = ".bash_alias_manager.toml";
/// JSON configuration written by earlier releases, read when the TOML file is absent
pub const LEGACY_CONFIG_FILE_NAME: &str = ".bash_alias_manager.json";

/// Environment setting sandboxed packages (snap) use to point at the real home
pub const HOME_OVERRIDE_VAR: &str = "SNAP_REAL_HOME";

/// Resolved home directory every dotfile path is derived from.
///
/// Constructed once by the front-end and passed down, so nothing below the
/// CLI reads process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Home(PathBuf);

impl Home {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Use `overridden` when given and non-empty, else the OS home directory.
    ///
    /// # Errors
    ///
    /// - Return [`NoWayHome`] if no home directory can be determined.
    pub fn resolve(overridden: Option<&Path>) -> Result<Self, NoWayHome> {
        match overridden.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => Ok(Self::new(path)),
            None => dirs::home_dir().map(Self).ok_or(NoWayHome),
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn alias_file(&self) -> PathBuf {
        self.0.join(ALIAS_FILE_NAME)
    }

    pub fn startup_file(&self) -> PathBuf {
        self.0.join(STARTUP_FILE_NAME)
    }

    pub fn config_file(&self) -> PathBuf {
        self.0.join(CONFIG_FILE_NAME)
    }

    pub fn legacy_config_file(&self) -> PathBuf {
        self.0.join(LEGACY_CONFIG_FILE_NAME)
    }

    /// Expand a leading `~` component against this home directory
    pub fn expand_tilde(&self, path: &Path) -> PathBuf {
        match path.strip_prefix("~") {
            Ok(rest) if rest.as_os_str().is_empty() => self.0.clone(),
            Ok(rest) => self.0.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }

    /// Spell `path` the way a shell startup file would: `~/...` when it lives
    /// under this home directory, verbatim otherwise
    pub fn shell_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.0) {
            Ok(rest) if !rest.as_os_str().is_empty() => format!("~/{}", rest.display()),
            _ => path.display().to_string(),
        }
    }
}

/// No way to determine user's home directory.
#[derive(Clone, Debug, thiserror::Error)]
#[error("cannot determine absolute path to user's home directory")]
pub struct NoWayHome;
