//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::model::AliasList;

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Calculate (index, name, command) column widths for the terminal width
fn calculate_column_widths(term_width: usize) -> (usize, usize, usize) {
    // Spaces between the three columns
    let fixed_overhead = 2;
    let index_width = 4;

    let available = term_width.saturating_sub(fixed_overhead + index_width);

    // Allocate: name gets ~30%, command gets the rest
    let name_width = (available * 30 / 100).clamp(8, 24);
    let command_width = available.saturating_sub(name_width).max(10);

    (index_width, name_width, command_width)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

/// Print aliases as a numbered table
pub fn print_table(aliases: &AliasList) {
    let (index_w, name_w, command_w) = calculate_column_widths(get_terminal_width());

    println!(
        "{:>index_w$} {:<name_w$} {}",
        "#".bold().cyan(),
        "NAME".bold().cyan(),
        "COMMAND".bold().cyan(),
    );
    println!("{}", "─".repeat(index_w + name_w + command_w + 2).dimmed());

    for (position, alias) in aliases.iter().enumerate() {
        println!(
            "{:>index_w$} {:<name_w$} {}",
            (position + 1).to_string().dimmed(),
            truncate_value(&alias.name, name_w).green(),
            truncate_value(&alias.command, command_w),
        );
    }
}

/// Execute the list command
pub fn execute(ctx: &Context) -> Result<()> {
    let Some(aliases) = ctx.open_aliases()? else {
        return Ok(());
    };

    if aliases.is_empty() {
        println!(
            "{}",
            format!("No aliases in {}", ctx.store.alias_file().display()).dimmed()
        );
        return Ok(());
    }

    print_table(&aliases);
    println!();
    println!(
        "{}",
        format!("Total: {} alias(es)", aliases.len()).dimmed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_value() {
        assert_eq!(truncate_value("git status", 20), "git status");
        assert_eq!(truncate_value("git status --short", 10), "git sta...");
        assert_eq!(truncate_value("abcdef", 2), "ab");
    }

    #[test]
    fn test_column_widths() {
        let (index_w, name_w, command_w) = calculate_column_widths(80);
        assert_eq!(index_w, 4);
        assert_eq!(name_w, 22);
        assert_eq!(command_w, 52);

        let (_, name_w, command_w) = calculate_column_widths(10);
        assert_eq!(name_w, 8);
        assert_eq!(command_w, 10);
    }
}
