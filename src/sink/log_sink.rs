//! Sink that writes submissions to the log

use super::SubmissionSink;
use crate::state::ContactForm;
use anyhow::Result;

/// Logs each submitted form as JSON at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn accept(&mut self, form: ContactForm) -> Result<()> {
        let payload = serde_json::to_string(&form)?;
        tracing::info!(%payload, "Form submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_succeeds() {
        let mut sink = LogSink;
        let form = ContactForm {
            name: "Jo".to_string(),
            ..ContactForm::default()
        };
        assert!(sink.accept(form).is_ok());
    }
}
