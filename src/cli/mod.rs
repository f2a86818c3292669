//! CLI module
//!
//! Command-line interface for the tweet splitter.
//!
//! Running with no arguments reads `tweets.csv` and rewrites `out/`.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
