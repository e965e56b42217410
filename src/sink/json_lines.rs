//! Sink that appends submissions to a JSON Lines file

use super::SubmissionSink;
use crate::state::ContactForm;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One line of the submissions file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub form: ContactForm,
}

impl SubmissionRecord {
    pub fn new(form: ContactForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form,
        }
    }
}

/// Appends a [`SubmissionRecord`] per accepted form
///
/// Each record goes out in a single unbuffered write, so a failed submit
/// leaves nothing queued for the next one.
#[derive(Debug)]
pub struct JsonLinesSink<W = File> {
    path: PathBuf,
    writer: W,
}

impl JsonLinesSink {
    /// Open `path` for appending, creating it and its parent dirs if needed
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;

        Ok(Self::with_writer(path, file))
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Append to `writer`; `path` only labels log lines and errors
    pub fn with_writer(path: &Path, writer: W) -> Self {
        Self {
            path: path.to_path_buf(),
            writer,
        }
    }
}

impl<W: Write> SubmissionSink for JsonLinesSink<W> {
    fn accept(&mut self, form: ContactForm) -> Result<()> {
        let record = SubmissionRecord::new(form);
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');
        self.writer
            .write_all(&line)
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        tracing::info!(id = %record.id, path = %self.path.display(), "Form submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StaffRole;
    use pretty_assertions::assert_eq;

    fn read_records(path: &Path) -> Vec<SubmissionRecord> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_appends_one_record_per_submission() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.jsonl");
        let mut sink = JsonLinesSink::open(&path).unwrap();

        let first = ContactForm {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            ..ContactForm::default()
        };
        let second = ContactForm {
            staff: StaffRole::Instructor,
            ..first.clone()
        };
        sink.accept(first.clone()).unwrap();
        sink.accept(second.clone()).unwrap();

        let records = read_records(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].form, first);
        assert_eq!(records[1].form, second);
        assert_ne!(records[0].id, records[1].id);
    }

    /// Rejects the first `failures` writes, then records what it is given
    #[derive(Default)]
    struct FlakyWriter {
        failures: usize,
        written: Vec<u8>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(std::io::Error::other("No space left on device"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_is_not_replayed_on_retry() {
        let writer = FlakyWriter {
            failures: 1,
            ..FlakyWriter::default()
        };
        let mut sink = JsonLinesSink::with_writer(Path::new("submissions.jsonl"), writer);
        let form = ContactForm {
            name: "Jo".to_string(),
            ..ContactForm::default()
        };

        let err = sink.accept(form.clone()).unwrap_err();
        assert!(err.to_string().contains("failed to write submissions.jsonl"));
        assert!(sink.writer.written.is_empty());

        sink.accept(form.clone()).unwrap();
        let text = String::from_utf8(sink.writer.written.clone()).unwrap();
        let records: Vec<SubmissionRecord> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].form, form);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_device_reports_error_each_time() {
        let mut sink = JsonLinesSink::open(Path::new("/dev/full")).unwrap();
        assert!(sink.accept(ContactForm::default()).is_err());
        assert!(sink.accept(ContactForm::default()).is_err());
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.jsonl");

        JsonLinesSink::open(&path)
            .unwrap()
            .accept(ContactForm::default())
            .unwrap();
        JsonLinesSink::open(&path)
            .unwrap()
            .accept(ContactForm::default())
            .unwrap();

        assert_eq!(read_records(&path).len(), 2);
    }

    #[test]
    fn test_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.jsonl");
        assert!(JsonLinesSink::open(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_record_uses_wire_names() {
        let record = SubmissionRecord::new(ContactForm::default());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("submittedAt").is_some());
        assert_eq!(json["form"]["phoneType"], "");
    }
}
