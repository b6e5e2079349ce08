//! Add command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::store::AliasSession;

/// Execute the add command
pub fn execute(ctx: &Context, name: &str, command: &str) -> Result<()> {
    let Some(aliases) = ctx.open_aliases()? else {
        return Ok(());
    };

    if aliases.iter().any(|a| a.name == name.trim()) {
        ctx.print_warning(&format!(
            "'{}' is already defined; the new definition wins when sourced",
            name.trim()
        ));
    }

    let mut session = AliasSession::with_list(&ctx.store, aliases);
    let alias = session.add(name, command)?;

    ctx.print_success(&format!(
        "Added alias '{}' = '{}'",
        alias.name.cyan(),
        alias.command
    ));
    ctx.print_reload_hint();

    Ok(())
}
