//! Utility helpers

pub mod http;
pub mod path;
