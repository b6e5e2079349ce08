//! Persistent alias file storage
//!
//! [`AliasStore`] owns the location of the alias file and is the only place
//! that reads or writes it. File access failures are sorted into three kinds:
//!
//! | Condition | Load | Save / append |
//! |-----------|------|---------------|
//! | not found | empty list | [`StoreError::NotFound`] (startup file only) |
//! | access denied | [`StoreError::PermissionDenied`] | [`StoreError::PermissionDenied`] |
//! | anything else | [`StoreError::Io`] | [`StoreError::Io`] |
//!
//! Access denied is kept apart because sandboxed installs can't reach
//! dotfiles at all; callers fall back to importing a user-picked file.

mod session;
mod sourcing;

pub use session::AliasSession;
pub use sourcing::{ensure_sourced, source_snippet, SourceStatus};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::formatter::serialize;
use crate::model::{Alias, AliasList};
use crate::parser::parse;
use crate::utils::path::Home;

/// Result of trying to reach the alias file
#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    /// File was read and parsed
    Loaded(AliasList),
    /// File does not exist yet; treated as an empty list
    Missing,
    /// File exists but can't be read; the user has to import it by hand
    AwaitManualImport(PathBuf),
}

impl LoadOutcome {
    /// Aliases available after this outcome, `None` while awaiting an import
    pub fn into_list(self) -> Option<AliasList> {
        match self {
            LoadOutcome::Loaded(list) => Some(list),
            LoadOutcome::Missing => Some(AliasList::new()),
            LoadOutcome::AwaitManualImport(_) => None,
        }
    }
}

/// Alias file reader/writer.
///
/// Single writer: [`AliasStore::save`] overwrites the whole file, so edits
/// made by other programs between load and save are lost.
#[derive(Debug, Clone)]
pub struct AliasStore {
    alias_file: PathBuf,
}

impl AliasStore {
    pub fn new(alias_file: impl Into<PathBuf>) -> Self {
        Self {
            alias_file: alias_file.into(),
        }
    }

    /// Store for `<home>/.bash_aliases`
    pub fn for_home(home: &Home) -> Self {
        Self::new(home.alias_file())
    }

    pub fn alias_file(&self) -> &Path {
        &self.alias_file
    }

    /// Try to reach the alias file and report which access state it is in
    pub fn open(&self) -> Result<LoadOutcome, StoreError> {
        debug!("loading aliases from {}", self.alias_file.display());

        match std::fs::read(&self.alias_file) {
            Ok(content) => {
                let aliases = parse(&content);
                for alias in &aliases {
                    debug!("loaded alias: {}", alias);
                }
                info!("total aliases loaded: {}", aliases.len());
                Ok(LoadOutcome::Loaded(AliasList::from_aliases(aliases)))
            }
            Err(err) => match classify(&self.alias_file, err) {
                StoreError::NotFound { .. } => {
                    debug!("alias file does not exist, starting with an empty list");
                    Ok(LoadOutcome::Missing)
                }
                StoreError::PermissionDenied { path } => Ok(LoadOutcome::AwaitManualImport(path)),
                err => Err(err),
            },
        }
    }

    /// Load the alias list; a missing file yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`StoreError::PermissionDenied`] when the file can't be accessed.
    /// - [`StoreError::Io`] for any other read failure.
    pub fn load(&self) -> Result<AliasList, StoreError> {
        match self.open()? {
            LoadOutcome::AwaitManualImport(path) => Err(StoreError::PermissionDenied { path }),
            outcome => Ok(outcome.into_list().unwrap_or_default()),
        }
    }

    /// Overwrite the alias file with `aliases`
    pub fn save(&self, aliases: &[Alias]) -> Result<(), StoreError> {
        debug!(
            "writing {} aliases to {}",
            aliases.len(),
            self.alias_file.display()
        );
        std::fs::write(&self.alias_file, serialize(aliases))
            .map_err(|err| classify(&self.alias_file, err))
    }

    /// Raw alias file content, for handing to the backup collaborator
    pub fn read_raw(&self) -> Result<Vec<u8>, StoreError> {
        std::fs::read(&self.alias_file).map_err(|err| classify(&self.alias_file, err))
    }

    /// Write raw content (a restored backup) to the alias file verbatim
    pub fn write_raw(&self, content: &[u8]) -> Result<(), StoreError> {
        std::fs::write(&self.alias_file, content).map_err(|err| classify(&self.alias_file, err))
    }
}

/// Replace `list` with the aliases found in `content`.
///
/// Returns the number of aliases imported.
pub fn import_bytes(list: &mut AliasList, content: &[u8]) -> usize {
    let aliases = parse(content);
    let count = aliases.len();
    list.reset(aliases);
    info!("imported {} aliases", count);
    count
}

/// Sort an I/O failure on `path` into the store's error kinds
pub fn classify(path: &Path, err: std::io::Error) -> StoreError {
    let path = path.to_path_buf();
    match err.kind() {
        ErrorKind::NotFound => StoreError::NotFound { path },
        ErrorKind::PermissionDenied => StoreError::PermissionDenied { path },
        _ => StoreError::Io { path, source: err },
    }
}

/// Alias store failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no alias at position {} (list has {})", index + 1, len)]
    NoSuchAlias { index: usize, len: usize },

    #[error("invalid alias: {0}")]
    InvalidAlias(String),
}

impl StoreError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, StoreError::PermissionDenied { .. })
    }
}
