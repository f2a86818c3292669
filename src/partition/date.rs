//! Date key extraction

use crate::error::{Error, Result};
use crate::types::Record;
use chrono::{DateTime, FixedOffset};

/// Format of the `timestamp` column, e.g. `2017-08-01 16:23:56 +0000`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Format of the derived date key
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a timestamp string, keeping its own UTC offset
///
/// chrono tolerates missing or repeated whitespace and a colon in the
/// offset, so the parsed value must format back to exactly `value`.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let parsed = DateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| Error::invalid_timestamp(value, e.to_string()))?;

    if parsed.format(TIMESTAMP_FORMAT).to_string() != value {
        return Err(Error::invalid_timestamp(
            value,
            "expected exactly YYYY-MM-DD HH:MM:SS +HHMM",
        ));
    }
    Ok(parsed)
}

/// Derive the `YYYY-MM-DD` key of a record
///
/// The date is taken in the timestamp's own offset; no conversion to UTC.
pub fn extract_date(record: &Record) -> Result<String> {
    let value = record
        .timestamp()
        .ok_or_else(|| Error::invalid_timestamp("", "record has no timestamp field"))?;

    Ok(parse_timestamp(value)?.format(DATE_FORMAT).to_string())
}
