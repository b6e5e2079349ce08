//! Init command: wire the alias file into the shell startup file

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::store::{ensure_sourced, source_snippet, SourceStatus, StoreError};

/// Execute the init command
pub fn execute(ctx: &Context) -> Result<()> {
    let startup = ctx.startup_file.display();
    let alias_file = ctx.store.alias_file();

    match ensure_sourced(&ctx.startup_file, alias_file, &ctx.home) {
        Ok(SourceStatus::AlreadySourced) => {
            ctx.print_success(&format!(
                "{} already sources {}",
                startup,
                alias_file.display()
            ));
        }
        Ok(SourceStatus::Appended) => {
            ctx.print_success(&format!(
                "Added sourcing of {} to {}",
                alias_file.display(),
                startup
            ));
            println!(
                "{} {}",
                "→".cyan(),
                format!("Open a new shell or run 'source {}'", startup).dimmed()
            );
        }
        Err(err @ (StoreError::PermissionDenied { .. } | StoreError::NotFound { .. })) => {
            ctx.print_warning(&format!("Cannot edit {}: {}", startup, err));
            println!("To ensure aliases are loaded, add these lines to it manually:");
            let snippet = source_snippet(&ctx.home.shell_path(alias_file));
            println!("{}", snippet.trim_start().yellow());
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
