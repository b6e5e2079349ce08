//! Import command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use std::path::Path;

use super::list::print_table;
use crate::cli::context::Context;
use crate::model::AliasList;
use crate::parser::parse;
use crate::store::{AliasSession, StoreError};
use crate::utils::http::{fetch_url, is_url};

/// Execute the import command.
///
/// The imported aliases replace the current list; the alias file does not
/// need to be readable, only writable.
pub fn execute(ctx: &Context, source: &str, yes: bool) -> Result<()> {
    let (content, picked) = if is_url(source) {
        println!("Fetching from URL: {}", source.cyan());
        (fetch_url(source)?.into_bytes(), None)
    } else {
        let path = ctx.resolve_path(Path::new(source));
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        (std::fs::read(&path)?, Some(path))
    };

    let preview = AliasList::from_aliases(parse(&content));
    if preview.is_empty() {
        println!("{}", "No aliases found in source.".yellow());
        return Ok(());
    }

    println!();
    println!(
        "{}",
        format!("Found {} aliases:", preview.len()).green().bold()
    );
    println!();
    print_table(&preview);
    println!();

    if !yes
        && !Confirm::new()
            .with_prompt(format!(
                "Replace the aliases in {}?",
                ctx.store.alias_file().display()
            ))
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let mut session = AliasSession::with_list(&ctx.store, AliasList::new());
    match session.import(&content) {
        Ok(count) => {
            ctx.print_success(&format!("Imported {} aliases", count));
            ctx.print_reload_hint();
            Ok(())
        }
        Err(StoreError::PermissionDenied { path }) => {
            ctx.print_warning(&format!(
                "Loaded {} aliases, but {} is not writable; nothing was saved there.",
                session.aliases().len(),
                path.display()
            ));
            ctx.print_manual_import_hint(picked.as_deref());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
