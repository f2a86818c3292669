//! CSV loader module
//!
//! Reads the tweet archive and yields raw rows.
//!
//! # Overview
//!
//! The loader module provides:
//! - `open_rows` - Open a CSV file and stream its data rows
//! - `RowReader` - Lazy, single-pass iterator over `RawRow`s
//!
//! The first row is always treated as a header and discarded. Rows of any
//! length are yielded; length checks happen in the schema mapper. A blank
//! line is yielded as a row with no fields. Line endings are normalized to
//! `\n`, inside quoted fields too.

mod reader;

pub use reader::{open_rows, RowReader};
