//! Edit command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use super::to_index;
use crate::cli::context::Context;
use crate::store::AliasSession;

/// Execute the edit command
pub fn execute(
    ctx: &Context,
    position: usize,
    name: Option<&str>,
    command: Option<&str>,
) -> Result<()> {
    let index = to_index(position)?;
    let Some(aliases) = ctx.open_aliases()? else {
        return Ok(());
    };

    let current = match aliases.get(index) {
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
        "Editing alias '{}' (current command: '{}')",
        current.name.cyan(),
        current.command.dimmed()
    );

    // Prompt for both fields when nothing was passed on the command line
    let (new_name, new_command) = match (name, command) {
        (None, None) => {
            let name: String = Input::new()
                .with_prompt("Name")
                .with_initial_text(&current.name)
                .interact_text()?;
            let command: String = Input::new()
                .with_prompt("Command")
                .with_initial_text(&current.command)
                .interact_text()?;
            (name, command)
        }
        (name, command) => (
            name.unwrap_or(&current.name).to_string(),
            command.unwrap_or(&current.command).to_string(),
        ),
    };

    if new_name.trim() == current.name && new_command.trim() == current.command {
        println!("No changes made.");
        return Ok(());
    }

    let mut session = AliasSession::with_list(&ctx.store, aliases);
    session.edit(index, &new_name, &new_command)?;

    ctx.print_success(&format!(
        "Updated alias '{}' = '{}'",
        new_name.trim().cyan(),
        new_command.trim()
    ));
    ctx.print_reload_hint();

    Ok(())
}
