//! Submission sinks
//!
//! Where a validated contact form goes once it passes validation.

mod json_lines;
mod log_sink;
mod traits;

pub use json_lines::JsonLinesSink;
pub use log_sink::LogSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::config::FormConfig;
use anyhow::Result;

/// Build the sink selected by `config`: a JSON Lines file when
/// `submissions_file` is set, log output otherwise.
pub fn from_config(config: &FormConfig) -> Result<Box<dyn SubmissionSink>> {
    match &config.submissions_file {
        Some(path) => Ok(Box::new(JsonLinesSink::open(path)?)),
        None => Ok(Box::new(LogSink)),
    }
}
