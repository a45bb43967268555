// CLI module for mp3meta
//
// Argument parsing, logging setup and output formatting for the binary.
// The library crate knows nothing about any of it.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

pub use config::{Commands, Config};
pub use output::OutputFormatter;
