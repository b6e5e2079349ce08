//! bam - Bash Alias Manager
//!
//! Manages shell aliases kept in `~/.bash_aliases`.
//!
//! # Features
//!
//! - Parse the alias file into an ordered list and write it back
//! - Add, edit, and remove aliases, saving after every change
//! - Import aliases from any file or URL
//! - Make `~/.bashrc` source the alias file
//! - Back up and restore the alias file through a private GitHub Gist
//!
//! When the alias file can't be read because of permissions (sandboxed
//! installs), loading reports [`StoreError::PermissionDenied`] instead of
//! pretending the file is empty, and the caller falls back to importing a
//! file the user picks.

pub mod backup;
pub mod cli;
pub mod config;
pub mod formatter;
pub mod model;
pub mod parser;
pub mod store;
pub mod utils;

pub use backup::{BackupRemote, GistClient, RemoteError};
pub use formatter::serialize;
pub use model::{Alias, AliasChange, AliasList, Config};
pub use parser::parse;
pub use store::{ensure_sourced, AliasSession, AliasStore, LoadOutcome, StoreError};
pub use utils::path::Home;
