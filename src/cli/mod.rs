//! CLI entry point: validate a document and print the regrouped paths.

mod cli;
mod commands;

pub use cli::*;
pub use commands::*;
