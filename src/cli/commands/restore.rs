//! Restore command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use std::path::Path;

use super::list::print_table;
use crate::backup::{restore_aliases, BackupError, GistClient};
use crate::cli::context::Context;
use crate::store::StoreError;

/// Execute the restore command
pub fn execute(ctx: &Context, output: Option<&Path>, yes: bool, api_url: &str) -> Result<()> {
    let config = ctx.load_config()?;
    let (Some(token), Some(_)) = (config.token(), config.gist()) else {
        anyhow::bail!("{}", BackupError::NoBackup);
    };

    if !yes
        && !Confirm::new()
            .with_prompt(format!(
                "Overwrite {} with the Gist backup?",
                ctx.store.alias_file().display()
            ))
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let client = GistClient::new(token).with_api_url(api_url)?;
    let fallback = output.map(|p| ctx.resolve_path(p));

    let report = match restore_aliases(&client, &config, &ctx.store, fallback.as_deref()) {
        Ok(report) => report,
        Err(BackupError::Store(StoreError::PermissionDenied { path })) => {
            ctx.print_error(&format!(
                "Cannot write {} (permission denied).",
                path.display()
            ));
            println!(
                "{} {}",
                "→".cyan(),
                "Choose where to save the backup with: bam restore --output <file>".dimmed()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if report.used_fallback {
        ctx.print_warning(&format!(
            "Saved backup to {} instead of the alias file",
            report.written_to.display()
        ));
    }
    ctx.print_success(&format!(
        "Restored {} aliases from Gist",
        report.aliases.len()
    ));
    if !report.aliases.is_empty() {
        println!();
        print_table(&report.aliases);
    }
    ctx.print_reload_hint();

    Ok(())
}
