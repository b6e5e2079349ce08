//! Formatter module for the alias file

use crate::model::Alias;

/// Format a single alias as `alias <name>='<command>'`.
///
/// The command is not escaped; an embedded `'` yields a line the shell
/// can't read back.
pub fn format_alias(alias: &Alias) -> String {
    format!("alias {}='{}'", alias.name, alias.command)
}

/// Serialize aliases into alias file content, one line each, in order
pub fn serialize<'a, I>(aliases: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a Alias>,
{
    let mut out = String::new();
    for alias in aliases {
        out.push_str(&format_alias(alias));
        out.push('\n');
    }
    out.into_bytes()
}
