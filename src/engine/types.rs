//! Engine types
//!
//! Run summary returned by the pipeline.

use crate::output::WriteStats;

/// Outcome of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Data rows read from the CSV
    pub records: usize,
    /// Groups written, including ones whose file was later overwritten
    pub groups_written: usize,
    /// Groups that overwrote a file written earlier in the run
    pub collisions: usize,
    /// Files present in the output directory at the end
    pub files_present: usize,
}

impl RunSummary {
    /// Combine the record count with the writer's stats
    pub fn new(records: usize, stats: WriteStats) -> Self {
        Self {
            records,
            groups_written: stats.groups_written,
            collisions: stats.collisions,
            files_present: stats.files_present,
        }
    }

    /// Whether any group overwrote an earlier one (input was not sorted)
    pub fn has_collisions(&self) -> bool {
        self.collisions > 0
    }
}
