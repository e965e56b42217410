//! Application state and core logic

use crate::config::FormConfig;
use crate::sink::SubmissionSink;
use crate::state::{AppState, FieldKey, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Destination for validated submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::new(config),
            sink,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let on_submit_row = self.state.is_submit_row_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => {
                self.submit();
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_submission();
            }
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            // Enter adds a line in the bio; anywhere else it submits
            KeyCode::Enter => {
                if on_submit_row || !self.state.form_newline() {
                    self.submit();
                }
            }
            KeyCode::Left => self.state.cycle_choice(false),
            KeyCode::Right => self.state.cycle_choice(true),
            KeyCode::Char(c) if plain && !on_submit_row => self.state.form_input_char(c),
            KeyCode::Backspace if !on_submit_row => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and, when clean, hand it to the sink
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(snapshot) = self.state.prepare_submission() else {
            let error_count = self.state.errors.len();
            self.status_message = Some(match error_count {
                1 => "1 field needs attention".to_string(),
                n => format!("{n} fields need attention"),
            });
            return SubmitOutcome::Rejected { error_count };
        };

        match self.sink.accept(snapshot.clone()) {
            Ok(()) => {
                self.state.complete_submission(snapshot);
                self.status_message = Some("Form submitted!".to_string());
                SubmitOutcome::Submitted
            }
            Err(err) => {
                tracing::warn!("Submission sink failed: {err:?}");
                self.push_error(format!("Failed to submit form: {err}"));
                SubmitOutcome::SinkFailed
            }
        }
    }

    /// Copy the last accepted submission to the clipboard as JSON
    fn copy_last_submission(&mut self) {
        let Some(form) = &self.state.last_submission else {
            self.status_message = Some("Nothing submitted yet".to_string());
            return;
        };

        let result = serde_json::to_string_pretty(form)
            .map_err(anyhow::Error::from)
            .and_then(|json| copy_to_clipboard(&json));
        match result {
            Ok(()) => self.status_message = Some("Copied submission to clipboard".to_string()),
            Err(err) => self.push_error(format!("Failed to copy: {err}")),
        }
    }

    /// Error message to render beneath `key`, if any
    pub fn field_error(&self, key: FieldKey) -> Option<&str> {
        self.state.errors.get(key)
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
