//! Common types used throughout tweetsplit
//!
//! This module contains the tweet schema and the record/group types that
//! flow between the pipeline stages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Schema
// ============================================================================

/// Column names of the tweet archive CSV, in positional order
pub const COLUMNS: [&str; 10] = [
    "tweet_id",
    "in_reply_to_status_id",
    "in_reply_to_user_id",
    "timestamp",
    "source",
    "text",
    "retweeted_status_id",
    "retweeted_status_user_id",
    "retweeted_status_timestamp",
    "expanded_urls",
];

/// Name of the column the grouping key is derived from
pub const TIMESTAMP_COLUMN: &str = "timestamp";

// ============================================================================
// Raw Row
// ============================================================================

/// A CSV row as read, before it is mapped onto the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based position of the record in the file (the header is line 1)
    pub line: u64,
    /// Field values in file order
    pub fields: Vec<String>,
}

impl RawRow {
    /// Create a raw row
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }
}

// ============================================================================
// Record
// ============================================================================

/// One tweet, as named string fields
///
/// Serializes as a flat JSON object. Keys are kept in a `BTreeMap`, so the
/// output is always sorted by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The raw `timestamp` field, if present
    pub fn timestamp(&self) -> Option<&str> {
        self.get(TIMESTAMP_COLUMN)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// Group
// ============================================================================

/// A maximal run of consecutive records sharing the same date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Derived date key, `YYYY-MM-DD`
    pub date: String,
    /// Records in input order
    pub items: Vec<Record>,
}

impl Group {
    /// Create a group
    pub fn new(date: impl Into<String>, items: Vec<Record>) -> Self {
        Self {
            date: date.into(),
            items,
        }
    }

    /// Output file name for this group
    pub fn file_name(&self) -> String {
        format!("{}.json", self.date)
    }

    /// Number of records in the group
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group holds no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
