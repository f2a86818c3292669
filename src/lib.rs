// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # tweetsplit
//!
//! Splits a tweet archive CSV export into one JSON file per calendar date.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tweetsplit::{Pipeline, PipelineConfig, Result};
//!
//! fn main() -> Result<()> {
//!     // Reads tweets.csv, rewrites out/
//!     let pipeline = Pipeline::new(PipelineConfig::default());
//!     let summary = pipeline.run(&mut std::io::stdout())?;
//!     println!("{} tweets", summary.records);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! tweets.csv ──► loader ──► schema ──► partition ──► output ──► out/<date>.json
//!               RawRow     Record     Group (adjacent runs)
//! ```
//!
//! Grouping only splits on date changes between consecutive rows. Input that
//! is not sorted by timestamp produces several groups for the same date, and
//! the last one written wins.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Tweet schema, records and groups
pub mod types;

/// Input and output paths
pub mod config;

/// CSV loading
pub mod loader;

/// Positional row to record mapping
pub mod schema;

/// Date extraction and adjacent grouping
pub mod partition;

/// Output directory and JSON files
pub mod output;

/// Pipeline orchestration
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PipelineConfig;
pub use engine::{Pipeline, RunSummary};
pub use error::{Error, Result};
pub use types::{Group, RawRow, Record, COLUMNS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
