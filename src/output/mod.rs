//! Output module
//!
//! Owns the output directory: resets it, writes one pretty-printed JSON file
//! per group and counts what ended up on disk.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Resetting the output directory (delete recursively, then recreate)
//! - Writing a `Group` to `<dir>/<date>.json`
//! - Counting the files present after a run
//!
//! Files are named by date only, so a later group with an already written
//! date replaces the earlier file. `GroupWriter` tracks and logs those
//! collisions but does not merge.

mod writer;

pub use writer::{
    count_output_files, reset_output_dir, write_group_file, GroupWriter, WriteStats,
};

#[cfg(test)]
mod tests;
