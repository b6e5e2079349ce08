//! Wiring the alias file into the shell startup file

use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use super::{classify, StoreError};
use crate::utils::path::Home;

/// What [`ensure_sourced`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    AlreadySourced,
    Appended,
}

/// Shell lines that load `alias_path` when it exists.
///
/// `alias_path` is written as given; pass it through [`Home::shell_path`]
/// to get the `~/.bash_aliases` spelling.
pub fn source_snippet(alias_path: &str) -> String {
    format!(
        "\n# Source bash aliases\nif [ -f {path} ]; then\n    . {path}\nfi\n",
        path = alias_path
    )
}

/// Ways a startup file line may spell `alias_file`
fn references(home: &Home, alias_file: &Path) -> Vec<String> {
    let mut spellings = vec![alias_file.display().to_string()];
    if let Ok(rest) = alias_file.strip_prefix(home.path()) {
        spellings.push(format!("~/{}", rest.display()));
        spellings.push(format!("$HOME/{}", rest.display()));
        spellings.push(format!("${{HOME}}/{}", rest.display()));
    }
    spellings
}

/// Make sure `startup_file` sources `alias_file`.
///
/// A line containing the alias file's path (absolute, `~/`, or `$HOME/`
/// relative to `home`) counts as already wired. Otherwise
/// [`source_snippet`] for that file is appended; existing content is never
/// rewritten.
///
/// # Errors
///
/// - [`StoreError::NotFound`] if the startup file doesn't exist.
/// - [`StoreError::PermissionDenied`] if it can't be read or appended to.
pub fn ensure_sourced(
    startup_file: &Path,
    alias_file: &Path,
    home: &Home,
) -> Result<SourceStatus, StoreError> {
    let content = std::fs::read(startup_file).map_err(|err| classify(startup_file, err))?;
    let spellings = references(home, alias_file);

    if String::from_utf8_lossy(&content)
        .lines()
        .any(|line| spellings.iter().any(|s| line.contains(s.as_str())))
    {
        debug!(
            "{} already sources {}",
            startup_file.display(),
            alias_file.display()
        );
        return Ok(SourceStatus::AlreadySourced);
    }

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(startup_file)
        .map_err(|err| classify(startup_file, err))?;
    file.write_all(source_snippet(&home.shell_path(alias_file)).as_bytes())
        .map_err(|err| classify(startup_file, err))?;

    info!(
        "appended sourcing of {} to {}",
        alias_file.display(),
        startup_file.display()
    );
    Ok(SourceStatus::Appended)
}
