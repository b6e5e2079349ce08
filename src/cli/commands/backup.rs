//! Backup command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Password;
use std::path::Path;

use crate::backup::{alias_file_content, backup_aliases, GistClient};
use crate::cli::context::Context;
use crate::store::StoreError;

/// Execute the backup command
pub fn execute(ctx: &Context, from: Option<&Path>, api_url: &str) -> Result<()> {
    let content = match from {
        Some(path) => {
            let path = ctx.resolve_path(path);
            std::fs::read(&path)
                .map_err(|err| anyhow::anyhow!("Cannot read {}: {}", path.display(), err))?
        }
        None => match alias_file_content(&ctx.store) {
            Ok(content) => content,
            Err(StoreError::PermissionDenied { path }) => {
                anyhow::bail!(
                    "Cannot read {} (permission denied). Pass the file to back up with --from <file>.",
                    path.display()
                );
            }
            Err(err) => return Err(err.into()),
        },
    };

    let mut config = ctx.load_config()?;
    let prompted = config.token().is_none();
    if prompted {
        let token: String = Password::new()
            .with_prompt("GitHub Personal Access Token (needs 'gist' scope)")
            .interact()?;
        config.github_token = Some(token.trim().to_string());
    }

    let token = config.token().unwrap_or_default().to_string();
    let client = GistClient::new(token).with_api_url(api_url)?;
    let config_path = ctx.home.config_file();

    let report = backup_aliases(&client, &mut config, &config_path, &content)?;

    if prompted && !report.created {
        crate::config::save_config(&ctx.home, &config)?;
    }

    if report.created {
        ctx.print_success(&format!(
            "Created backup gist {} ({} bytes)",
            report.gist_id.cyan(),
            report.bytes
        ));
    } else {
        ctx.print_success(&format!(
            "Updated backup gist {} ({} bytes)",
            report.gist_id.cyan(),
            report.bytes
        ));
    }

    Ok(())
}
