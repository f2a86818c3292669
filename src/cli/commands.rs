//! CLI arguments

use crate::config::{PipelineConfig, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

/// Split a tweet archive CSV into one JSON file per date
#[derive(Parser, Debug)]
#[command(name = "tweetsplit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tweet archive CSV
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output directory (deleted and recreated on every run)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Pipeline configuration described by the arguments
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new()
            .with_input(&self.input)
            .with_output_dir(&self.output)
    }
}
