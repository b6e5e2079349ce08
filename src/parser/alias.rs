//! Line grammar for alias definitions

/// Literal prefix every alias definition line starts with
pub const ALIAS_PREFIX: &str = "alias ";

/// Characters stripped from both ends of a command
const QUOTES: [char; 2] = ['\'', '"'];

/// Try to parse a single line as an alias definition.
///
/// The line is trimmed first. It qualifies iff it starts with `alias ` and
/// has an `=` after that prefix; the remainder is split at the first `=`.
/// Any run of `'`/`"` characters is trimmed from both ends of the command,
/// not a single matched pair, so `'"it's"'` comes out as `it's`.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix(ALIAS_PREFIX)?;
    let (name, command) = rest.split_once('=')?;

    let name = name.trim();
    let command = command.trim().trim_matches(&QUOTES[..]);
    Some((name, command))
}
