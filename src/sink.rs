//! Host-side submission handler: hands finished records off as JSON

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::form::{SubmitHandler, Submission};

/// Writes each submission to a JSON file.
///
/// Without a path nothing is written at submit time; the caller prints
/// the record once the terminal is back to normal.
#[derive(Debug, Clone, Default)]
pub struct JsonSink {
    path: Option<PathBuf>,
}

impl JsonSink {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl SubmitHandler for JsonSink {
    fn submit(&mut self, submission: &Submission) -> Result<()> {
        match self.path {
            Some(ref path) => write_submission(path, submission),
            None => Ok(()),
        }
    }
}

/// Pretty JSON for a submission
pub fn render_submission(submission: &Submission) -> Result<String> {
    serde_json::to_string_pretty(submission).context("Failed to serialize submission")
}

/// Write a submission to `path`, creating parent directories
pub fn write_submission(path: &Path, submission: &Submission) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = render_submission(submission)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(id = %submission.id, path = %path.display(), "Wrote submission");
    Ok(())
}
