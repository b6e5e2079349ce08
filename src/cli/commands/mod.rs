//! CLI command implementations

pub mod add;
pub mod backup;
pub mod config;
pub mod edit;
pub mod import;
pub mod init;
pub mod list;
pub mod remove;
pub mod restore;

use anyhow::Result;

use crate::cli::args::{Cli, Commands};
use crate::cli::context::Context;

/// Run the command selected on the command line (`list` by default)
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::from_cli(cli)?;

    match cli.command.as_ref().unwrap_or(&Commands::List) {
        Commands::List => list::execute(&ctx),
        Commands::Add { name, command } => add::execute(&ctx, name, command),
        Commands::Edit {
            index,
            name,
            command,
        } => edit::execute(&ctx, *index, name.as_deref(), command.as_deref()),
        Commands::Remove { index, yes } => remove::execute(&ctx, *index, *yes),
        Commands::Import { source, yes } => import::execute(&ctx, source, *yes),
        Commands::Init => init::execute(&ctx),
        Commands::Backup { from, api_url } => backup::execute(&ctx, from.as_deref(), api_url),
        Commands::Restore {
            output,
            yes,
            api_url,
        } => restore::execute(&ctx, output.as_deref(), *yes, api_url),
        Commands::Config => config::execute(&ctx),
    }
}

/// Convert a 1-based position from the command line to a list index
pub(crate) fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Positions start at 1 (see 'bam list')"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_index() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert_eq!(to_index(7).unwrap(), 6);
        assert!(to_index(0).is_err());
    }
}
