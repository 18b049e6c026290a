//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use clap::ValueEnum;

pub mod check;
pub mod price;
pub mod var;

/// Output rendering for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawn table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}
