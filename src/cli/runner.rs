//! CLI runner - executes the pipeline

use crate::cli::commands::Cli;
use crate::engine::{Pipeline, RunSummary};
use crate::error::Result;
use std::io::{self, Write};
use tracing::warn;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the pipeline, reporting to stdout
    pub fn run(&self) -> Result<RunSummary> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let summary = self.run_with(&mut out)?;
        out.flush()?;
        Ok(summary)
    }

    /// Run the pipeline, reporting to `out`
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let pipeline = Pipeline::new(self.cli.pipeline_config());
        let summary = pipeline.run(out)?;

        if summary.has_collisions() {
            warn!(
                groups = summary.groups_written,
                files = summary.files_present,
                "{} group(s) shared a date with an earlier group and replaced its file; sort the input by timestamp to keep every tweet",
                summary.collisions
            );
        }

        Ok(summary)
    }
}
