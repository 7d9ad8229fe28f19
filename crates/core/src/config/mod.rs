//! Configuration loading and schema definitions
//!
//! Front ends share one TOML file so every sibling tool picks up the same
//! stdin timeout, formatter, and log settings.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
