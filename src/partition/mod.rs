//! Date partitioning module
//!
//! Derives the date key of each record and splits the record sequence into
//! runs of equal keys.
//!
//! # Overview
//!
//! Grouping is *adjacent*: a new group starts every time the key changes
//! from the previous record. Records with the same date that are separated
//! by another date end up in separate groups, so callers that want one
//! group per date must sort the input first.

mod date;
mod grouper;

pub use date::{extract_date, parse_timestamp, DATE_FORMAT, TIMESTAMP_FORMAT};
pub use grouper::{group_adjacent, group_by_date};
