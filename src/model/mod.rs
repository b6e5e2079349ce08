//! Core data models for bam

mod alias;
mod config;

pub use alias::{Alias, AliasChange, AliasList};
pub use config::{Config, ConfigError};
