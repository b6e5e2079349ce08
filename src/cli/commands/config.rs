//! Config command: show resolved paths and backup settings

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;

/// Keep the first and last few characters of a secret
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

/// Execute the config command
pub fn execute(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let unset = || "(not set)".dimmed().to_string();

    println!("{}", "Paths".bold());
    println!("  {:<14} {}", "home", ctx.home.path().display());
    println!("  {:<14} {}", "alias file", ctx.store.alias_file().display());
    println!("  {:<14} {}", "startup file", ctx.startup_file.display());
    println!(
        "  {:<14} {}",
        "config file",
        crate::config::config_source(&ctx.home).display()
    );
    println!();
    println!("{}", "Backup".bold());
    println!(
        "  {:<14} {}",
        "github token",
        config.token().map(mask).unwrap_or_else(unset)
    );
    println!(
        "  {:<14} {}",
        "gist id",
        config
            .gist()
            .map(|id| id.cyan().to_string())
            .unwrap_or_else(unset)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("ghp_1234567890abcd"), "ghp_…abcd");
        assert_eq!(mask("short"), "*****");
        assert_eq!(mask(""), "");
    }
}
