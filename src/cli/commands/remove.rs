//! Remove command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::to_index;
use crate::cli::context::Context;
use crate::store::AliasSession;

/// Execute the remove command
pub fn execute(ctx: &Context, position: usize, yes: bool) -> Result<()> {
    let index = to_index(position)?;
    let Some(aliases) = ctx.open_aliases()? else {
        return Ok(());
    };

    let alias = match aliases.get(index) {
        Some(alias) => alias.clone(),
        None => {
            ctx.print_error(&format!(
                "No alias at position {} (found {})",
                position,
                aliases.len()
            ));
            return Ok(());
        }
    };

    println!(
        "Found alias '{}' = '{}'",
        alias.name.cyan(),
        alias.command.dimmed()
    );

    if !yes
        && !Confirm::new()
            .with_prompt("Are you sure you want to delete this alias?")
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let mut session = AliasSession::with_list(&ctx.store, aliases);
    session.delete(index)?;

    ctx.print_success(&format!("Removed alias '{}'", alias.name));
    ctx.print_reload_hint();

    Ok(())
}
