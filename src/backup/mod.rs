//! Remote backup of the alias file
//!
//! The alias file's bytes are shipped to a [`BackupRemote`] as an opaque
//! blob. [`GistClient`] is the GitHub implementation; the flows below only
//! see the trait.

mod gist;

pub use gist::{extract_backup, gist_payload, GistClient, DEFAULT_API_URL, GIST_FILENAME};

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::model::{AliasList, Config, ConfigError};
use crate::parser::parse;
use crate::store::{AliasStore, StoreError};

/// Remote storage for alias file snapshots
pub trait BackupRemote {
    /// Check that the credentials are accepted
    fn validate(&self) -> Result<(), RemoteError>;

    /// Create a new backup (`existing` is `None`) or overwrite `existing`.
    /// Returns the backup id.
    fn upsert_backup(&self, existing: Option<&str>, content: &[u8]) -> Result<String, RemoteError>;

    /// Download the content of backup `id`
    fn fetch_backup(&self, id: &str) -> Result<Vec<u8>, RemoteError>;
}

/// Failures talking to the backup remote
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("invalid GitHub token")]
    Unauthorized,

    #[error("request rejected (status {status}); ensure your GitHub token has the 'gist' scope and is valid")]
    Scope { status: u16 },

    #[error("backup gist not found")]
    NotFound,

    #[error("GitHub request failed with status {code}: {message}")]
    Status { code: u16, message: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("bash_aliases file not found in gist")]
    MissingFile,

    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

/// Failures of the backup and restore flows
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("no GitHub token configured")]
    NoToken,

    #[error("No backup found. Please backup first.")]
    NoBackup,

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What a backup did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    pub gist_id: String,
    pub created: bool,
    pub bytes: usize,
}

/// What a restore did
#[derive(Debug)]
pub struct RestoreReport {
    /// Where the fetched content ended up
    pub written_to: PathBuf,
    /// `true` when the alias file was denied and the fallback path was used
    pub used_fallback: bool,
    pub aliases: AliasList,
}

/// Content to back up from the alias file.
///
/// A missing file backs up as empty content. Access denied is returned as
/// [`StoreError::PermissionDenied`] so the caller can ask for a file instead.
pub fn alias_file_content(store: &AliasStore) -> Result<Vec<u8>, StoreError> {
    match store.read_raw() {
        Ok(content) => Ok(content),
        Err(StoreError::NotFound { .. }) => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

/// Upload `content` and remember the backup id.
///
/// The first successful backup stores the new gist id in `config` and saves
/// it to `config_path`; later backups update that gist.
pub fn backup_aliases(
    remote: &dyn BackupRemote,
    config: &mut Config,
    config_path: &Path,
    content: &[u8],
) -> Result<BackupReport, BackupError> {
    if config.token().is_none() {
        return Err(BackupError::NoToken);
    }
    remote.validate()?;

    let existing = config.gist().map(String::from);
    let gist_id = remote.upsert_backup(existing.as_deref(), content)?;
    let created = existing.is_none();

    if created {
        info!("created backup {}", gist_id);
        config.gist_id = Some(gist_id.clone());
        config.save_to(config_path)?;
    }

    Ok(BackupReport {
        gist_id,
        created,
        bytes: content.len(),
    })
}

/// Download the backup and write it over the alias file.
///
/// When the alias file can't be written and `fallback` is given, the content
/// goes there instead and is parsed directly.
pub fn restore_aliases(
    remote: &dyn BackupRemote,
    config: &Config,
    store: &AliasStore,
    fallback: Option<&Path>,
) -> Result<RestoreReport, BackupError> {
    let gist_id = match (config.token(), config.gist()) {
        (Some(_), Some(id)) => id,
        _ => return Err(BackupError::NoBackup),
    };

    remote.validate()?;
    let content = remote.fetch_backup(gist_id)?;

    match store.write_raw(&content) {
        Ok(()) => Ok(RestoreReport {
            written_to: store.alias_file().to_path_buf(),
            used_fallback: false,
            aliases: store.load()?,
        }),
        Err(StoreError::PermissionDenied { path }) => {
            let Some(target) = fallback else {
                return Err(StoreError::PermissionDenied { path }.into());
            };
            warn!(
                "cannot write {}, saving restored aliases to {}",
                path.display(),
                target.display()
            );
            AliasStore::new(target).write_raw(&content)?;
            Ok(RestoreReport {
                written_to: target.to_path_buf(),
                used_fallback: true,
                aliases: AliasList::from_aliases(parse(&content)),
            })
        }
        Err(err) => Err(err.into()),
    }
}
