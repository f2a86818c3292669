//! Row to record mapping

use crate::error::{Error, Result};
use crate::types::{RawRow, Record, COLUMNS};

/// Map a raw row onto the tweet schema
///
/// Fails with `MalformedRow` if the row has fewer fields than `COLUMNS`.
/// Fields past the end of the schema are ignored.
pub fn map_row(row: &RawRow) -> Result<Record> {
    if row.fields.len() < COLUMNS.len() {
        return Err(Error::malformed_row(
            row.line,
            COLUMNS.len(),
            row.fields.len(),
        ));
    }

    let mut record = Record::new();
    for (name, value) in COLUMNS.iter().zip(&row.fields) {
        record.insert(*name, value.as_str());
    }
    Ok(record)
}

/// Map every row from a fallible row source, stopping at the first error
pub fn map_rows<I>(rows: I) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = Result<RawRow>>,
{
    rows.into_iter()
        .map(|row| row.and_then(|row| map_row(&row)))
        .collect()
}
