//! Trait abstraction for submission sinks to enable mocking in tests

use crate::state::ContactForm;
use anyhow::Result;

/// Receives each validated form snapshot exactly once per successful submit
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Take ownership of a submitted form
    fn accept(&mut self, form: ContactForm) -> Result<()>;
}
