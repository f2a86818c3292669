//! Execution engine module
//!
//! Runs the read → map → group → write pipeline.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Pipeline` - Drives the loader, mapper, grouper and writer in order
//! - `RunSummary` - Counts reported at the end of a run
//!
//! Everything up to grouping finishes before the output directory is
//! touched, so a bad input row leaves the previous output in place.

mod types;

pub use types::RunSummary;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::loader::open_rows;
use crate::output::GroupWriter;
use crate::partition::group_by_date;
use crate::schema::map_rows;
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Tweet archive pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    /// Paths to read from and write to
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline for the given config
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline, writing the console report to `report`
    ///
    /// The report gets one `created: <path>` line per file written and a
    /// final `<N> files created.` line, where N is the number of files
    /// found in the output directory afterwards.
    pub fn run<W: Write>(&self, report: &mut W) -> Result<RunSummary> {
        let start = Instant::now();
        self.config.validate()?;

        info!(input = %self.config.input.display(), "Reading tweets");
        let records = map_rows(open_rows(&self.config.input)?)?;
        let record_count = records.len();

        let groups = group_by_date(records)?;
        info!(
            records = record_count,
            groups = groups.len(),
            "Grouped tweets by date"
        );

        let mut writer = GroupWriter::create(&self.config.output_dir)?;
        for group in &groups {
            let path = writer.write(group)?;
            writeln!(report, "created: {}", path.display())?;
        }

        let stats = writer.finish()?;
        writeln!(report, "{} files created.", stats.files_present)?;

        let summary = RunSummary::new(record_count, stats);
        info!(
            files = summary.files_present,
            collisions = summary.collisions,
            duration_ms = start.elapsed().as_millis() as u64,
            "Run complete"
        );
        Ok(summary)
    }
}
