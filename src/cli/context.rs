//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::model::{AliasList, Config};
use crate::store::{AliasStore, LoadOutcome};
use crate::utils::path::Home;

/// Common context for command execution
pub struct Context {
    pub home: Home,
    pub store: AliasStore,
    pub startup_file: PathBuf,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let home = Home::resolve(cli.home.as_deref())?;
        let alias_file = cli
            .alias_file
            .as_ref()
            .map(|p| home.expand_tilde(p))
            .unwrap_or_else(|| home.alias_file());
        let startup_file = cli
            .bashrc
            .as_ref()
            .map(|p| home.expand_tilde(p))
            .unwrap_or_else(|| home.startup_file());

        Ok(Self {
            store: AliasStore::new(alias_file),
            startup_file,
            home,
        })
    }

    /// Backup settings; only the backup commands need them
    pub fn load_config(&self) -> Result<Config> {
        Ok(crate::config::load_or_default(&self.home)?)
    }

    /// Resolve a path given on the command line against the home directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        self.home.expand_tilde(path)
    }

    /// Load the alias file, printing the manual-import hint when it's off limits.
    ///
    /// Returns `None` when access was denied.
    pub fn open_aliases(&self) -> Result<Option<AliasList>> {
        match self.store.open()? {
            LoadOutcome::AwaitManualImport(path) => {
                self.print_warning(&format!(
                    "Cannot access {} (permission denied, possibly sandboxed).",
                    path.display()
                ));
                self.print_manual_import_hint(None);
                Ok(None)
            }
            outcome => Ok(outcome.into_list()),
        }
    }

    /// Point the user at working on a file they picked instead of the
    /// unreachable alias file
    pub fn print_manual_import_hint(&self, picked: Option<&Path>) {
        let file = picked
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<file>".to_string());
        println!(
            "{} {}",
            "→".cyan(),
            format!(
                "Work on a copy of your aliases you can access: bam --alias-file {} list",
                file
            )
            .dimmed()
        );
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print reload hint after modifying aliases
    pub fn print_reload_hint(&self) {
        println!(
            "{} {}",
            "→".cyan(),
            format!(
                "Run 'source {}' to apply changes to the current shell",
                self.store.alias_file().display()
            )
            .dimmed()
        );
    }
}
