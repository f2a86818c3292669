//! Schema mapping module
//!
//! Turns positional CSV rows into named tweet records.
//!
//! # Overview
//!
//! Column `i` of a row is stored under `COLUMNS[i]`. Values stay strings;
//! nothing is coerced. Rows shorter than the schema are rejected, extra
//! trailing fields are dropped.

mod mapper;

pub use mapper::{map_row, map_rows};
