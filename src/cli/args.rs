//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::path::HOME_OVERRIDE_VAR;

#[derive(Parser)]
#[command(name = "bam")]
#[command(about = "Bash alias manager - manage ~/.bash_aliases with Gist backup")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Home directory all dotfiles are resolved against
    #[arg(long, global = true, env = HOME_OVERRIDE_VAR, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Alias file to manage instead of <home>/.bash_aliases
    #[arg(long, global = true, value_name = "PATH")]
    pub alias_file: Option<PathBuf>,

    /// Shell startup file instead of <home>/.bashrc
    #[arg(long, global = true, value_name = "PATH")]
    pub bashrc: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List aliases
    #[command(visible_alias = "ls")]
    List,

    /// Add an alias
    Add {
        /// Alias name
        name: String,
        /// Command the alias expands to
        command: String,
    },

    /// Edit the alias at a position shown by `list`
    Edit {
        /// 1-based position
        index: usize,
        /// New name (prompted when neither --name nor --command is given)
        #[arg(long)]
        name: Option<String>,
        /// New command
        #[arg(long)]
        command: Option<String>,
    },

    /// Remove the alias at a position shown by `list`
    #[command(visible_alias = "rm")]
    Remove {
        /// 1-based position
        index: usize,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace all aliases with the ones found in a file or URL
    Import {
        /// File path or URL
        source: String,
        /// Skip preview confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Make the shell startup file source the alias file
    Init,

    /// Back up the alias file to a private GitHub Gist
    Backup {
        /// Back up this file instead of the alias file
        #[arg(long, value_name = "PATH")]
        from: Option<PathBuf>,
        /// GitHub API base url
        #[arg(long, hide = true, default_value = crate::backup::DEFAULT_API_URL)]
        api_url: String,
    },

    /// Restore the alias file from the Gist backup
    Restore {
        /// Where to save the backup if the alias file can't be written
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
        /// GitHub API base url
        #[arg(long, hide = true, default_value = crate::backup::DEFAULT_API_URL)]
        api_url: String,
    },

    /// Show resolved paths and backup settings
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from(["bam", "edit", "2", "--command", "ls -A"]).unwrap();
        match cli.command {
            Some(Commands::Edit { index, name, command }) => {
                assert_eq!(index, 2);
                assert!(name.is_none());
                assert_eq!(command.as_deref(), Some("ls -A"));
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn test_default_is_no_subcommand() {
        let cli = Cli::try_parse_from(["bam", "--home", "/tmp/h"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/h")));
    }
}
