//! # Parser Module
//!
//! Turns alias file content into [`Alias`] records.
//!
//! ## Grammar
//!
//! ```text
//! alias NAME=COMMAND      (COMMAND optionally wrapped in ' or ")
//! ```
//!
//! Every line is handled independently. Lines that don't match (comments,
//! blank lines, other shell code, `alias foo` without `=`) are skipped, so
//! parsing never fails on malformed content. Content that isn't valid UTF-8
//! is decoded lossily.

mod alias;

pub use alias::{parse_line, ALIAS_PREFIX};

use std::io::Read;

use crate::model::Alias;

/// Parse alias definitions out of raw bytes, in file order
pub fn parse(content: &[u8]) -> Vec<Alias> {
    String::from_utf8_lossy(content)
        .lines()
        .filter_map(parse_line)
        .map(|(name, command)| Alias::new(name, command))
        .collect()
}

/// Parse alias definitions from a reader.
///
/// Fails only when the reader itself fails.
pub fn parse_reader<R: Read>(mut reader: R) -> std::io::Result<Vec<Alias>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    Ok(parse(&content))
}
