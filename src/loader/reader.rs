//! CSV row reader
//!
//! Wraps `csv::Reader` in flexible mode so short and long rows reach the
//! mapper instead of failing inside the CSV parser.
//!
//! `csv` skips blank lines silently. A blank line is still a row, one with
//! no fields, so the reader reconstructs them from line positions and yields
//! them as empty `RawRow`s for the mapper to reject.

use crate::error::{Error, Result};
use crate::types::RawRow;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, trace};

/// Open a CSV file and return an iterator over its data rows
///
/// Fails with `FileNotFound` when the path does not exist. The first record
/// is the header and is never yielded.
pub fn open_rows(path: impl AsRef<Path>) -> Result<RowReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::file_not_found(path)
        } else {
            Error::Io(e)
        }
    })?;

    debug!(path = %path.display(), "Opened input CSV");
    Ok(RowReader::from_reader(file))
}

// ============================================================================
// Row Reader
// ============================================================================

/// Record read from the CSV but not yet yielded
///
/// Whether its read consumed a line terminator is only known once the next
/// read succeeds or hits EOF.
#[derive(Debug)]
struct Held {
    /// Line the read started on
    start: u64,
    /// Lines consumed by the read, minus newlines inside quoted fields
    gap: u64,
    fields: Vec<String>,
}

/// Lazy, single-pass iterator over the data rows of a CSV source
pub struct RowReader<R: Read> {
    reader: csv::Reader<UniversalNewlines<R>>,
    header_read: bool,
    held: Option<Held>,
    ready: VecDeque<RawRow>,
    error: Option<Error>,
    finished: bool,
    rows_read: u64,
}

impl<R: Read> RowReader<R> {
    /// Build a reader over any byte source
    pub fn from_reader(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(UniversalNewlines::new(source));

        Self {
            reader,
            header_read: false,
            held: None,
            ready: VecDeque::new(),
            error: None,
            finished: false,
            rows_read: 0,
        }
    }

    /// Number of data rows yielded so far
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Read one CSV record and queue every row it resolves
    fn advance(&mut self) {
        let start = self.reader.position().line();
        let mut record = csv::StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(true) => {
                let end = self.reader.position().line();
                let quoted_newlines: u64 = record
                    .iter()
                    .map(|field| field.bytes().filter(|&b| b == b'\n').count() as u64)
                    .sum();
                let gap = end.saturating_sub(start).saturating_sub(quoted_newlines);

                if !self.header_read {
                    self.header_read = true;
                    trace!(fields = record.len(), "Skipped header");
                    return;
                }

                // A successful read after it means the held record was terminated
                if let Some(prev) = self.held.take() {
                    self.release(prev, true);
                }
                self.held = Some(Held {
                    start,
                    gap,
                    fields: record.iter().map(str::to_string).collect(),
                });
            }
            Ok(false) => {
                self.finished = true;
                if let Some(prev) = self.held.take() {
                    let terminated = self.reader.get_ref().last_byte() == Some(b'\n');
                    self.release(prev, terminated);
                }

                // Blank lines after the last record
                if self.header_read {
                    let end = self.reader.position().line();
                    self.push_blank_lines(start, end);
                }
            }
            Err(e) => {
                if let Some(prev) = self.held.take() {
                    self.release(prev, true);
                }
                self.finished = true;
                self.error = Some(Error::Csv(e));
            }
        }
    }

    /// Queue the blank lines preceding a held record, then the record
    fn release(&mut self, held: Held, terminated: bool) {
        let blanks = if terminated {
            held.gap.saturating_sub(1)
        } else {
            held.gap
        };
        let line = held.start + blanks;

        self.push_blank_lines(held.start, line);
        self.ready.push_back(RawRow::new(line, held.fields));
    }

    fn push_blank_lines(&mut self, from: u64, to: u64) {
        for line in from..to {
            debug!(line, "Blank line in input");
            self.ready.push_back(RawRow::new(line, Vec::new()));
        }
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(row) = self.ready.pop_front() {
                self.rows_read += 1;
                return Some(Ok(row));
            }
            if let Some(e) = self.error.take() {
                return Some(Err(e));
            }
            if self.finished {
                return None;
            }
            self.advance();
        }
    }
}

// ============================================================================
// Newline Normalization
// ============================================================================

/// Byte source that turns `\r\n` and lone `\r` into `\n`
///
/// With a single terminator byte every terminated record consumes exactly
/// one newline, which keeps line arithmetic in `RowReader` exact. Also
/// remembers the last byte handed out, so EOF can tell whether the final
/// record was terminated.
struct UniversalNewlines<R> {
    inner: R,
    /// Previous byte was a `\r`, so a following `\n` belongs to it
    after_cr: bool,
    last: Option<u8>,
}

impl<R> UniversalNewlines<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            after_cr: false,
            last: None,
        }
    }

    fn last_byte(&self) -> Option<u8> {
        self.last
    }
}

impl<R: Read> Read for UniversalNewlines<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }

            // Compact in place; the write index never passes the read index
            let mut written = 0;
            for i in 0..n {
                let byte = buf[i];
                if self.after_cr {
                    self.after_cr = false;
                    if byte == b'\n' {
                        continue;
                    }
                }
                if byte == b'\r' {
                    self.after_cr = true;
                    buf[written] = b'\n';
                } else {
                    buf[written] = byte;
                }
                written += 1;
            }

            if written > 0 {
                self.last = Some(buf[written - 1]);
                return Ok(written);
            }
        }
    }
}
