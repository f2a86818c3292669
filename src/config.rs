//! Pipeline configuration
//!
//! Input and output locations. The defaults are the fixed names the tool
//! has always used; the CLI may override them.

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Default input CSV
pub const DEFAULT_INPUT: &str = "tweets.csv";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "out";

// ============================================================================
// Pipeline Config
// ============================================================================

/// Where to read tweets from and where to write the per-date files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Tweet archive CSV
    pub input: PathBuf,

    /// Directory that is reset and filled with `<date>.json` files
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl PipelineConfig {
    /// Create a config with the default paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input CSV path
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Reject paths the writer must never reset
    ///
    /// The output directory is deleted on every run, so it may not be empty,
    /// a root or `.`/`..`, and may not be or contain the input file.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(Error::config("Input path cannot be empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::config("Output directory cannot be empty"));
        }

        if !has_normal_name(&self.output_dir) {
            return Err(Error::config(format!(
                "Refusing to use '{}' as output directory",
                self.output_dir.display()
            )));
        }

        if without_cur_dir(&self.input).starts_with(without_cur_dir(&self.output_dir)) {
            return Err(Error::config(format!(
                "Input '{}' lies inside output directory '{}', which is deleted on every run",
                self.input.display(),
                self.output_dir.display()
            )));
        }

        Ok(())
    }
}

/// Whether the last component is a plain directory name
fn has_normal_name(path: &Path) -> bool {
    matches!(path.components().next_back(), Some(Component::Normal(_)))
}

/// `path` with every `.` component dropped, so `./out` compares equal to `out`
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
