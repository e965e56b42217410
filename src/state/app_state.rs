//! Application state definitions

use super::forms::{validate, ContactForm, ErrorMap, FieldKey, FieldUpdate};
use crate::config::FormConfig;
use std::collections::VecDeque;

/// Index of the Submit button in the focus order, after every field
pub const SUBMIT_ROW: usize = FieldKey::ALL.len();

/// Where the form is in its edit/submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Last submit attempt failed validation
    ErrorsShown,
    /// Last submit attempt reached the sink
    Submitted,
}

/// Result of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected { error_count: usize },
    Submitted,
    SinkFailed,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Form
    pub form: ContactForm,
    pub errors: ErrorMap,
    pub status: FormStatus,
    pub last_submission: Option<ContactForm>,

    // Focus
    pub active_form_field: usize,

    // Behavior
    pub clear_errors_on_edit: bool,
    pub reset_after_submit: bool,

    // Modal error dialogs, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            clear_errors_on_edit: config.clear_errors_on_edit(),
            reset_after_submit: config.reset_after_submit(),
            ..Self::default()
        }
    }

    /// Field under focus, `None` when the Submit button is focused
    pub fn focused_field(&self) -> Option<FieldKey> {
        FieldKey::ALL.get(self.active_form_field).copied()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_form_field == SUBMIT_ROW
    }

    /// Move to next form field (wraps around through Submit)
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Number of focusable rows: every field plus the Submit button
    pub fn form_field_count(&self) -> usize {
        SUBMIT_ROW + 1
    }

    /// Replace the form with a copy carrying `update`.
    ///
    /// Any edit returns the form to [`FormStatus::Idle`]. Existing error
    /// messages stay on screen unless `clear_errors_on_edit` is set.
    pub fn edit(&mut self, update: FieldUpdate) {
        let key = update.key();
        if !self.form.accepts(&update) {
            tracing::debug!(field = %key, "edit rejected by input clamp");
            return;
        }

        self.form = self.form.apply(update);
        self.status = FormStatus::Idle;

        if self.clear_errors_on_edit {
            self.errors.remove(key);
            // The phone type error only exists because a phone was entered
            if key == FieldKey::Phone {
                self.errors.remove(FieldKey::PhoneType);
            }
        }
    }

    /// Handle character input in the focused field
    pub fn form_input_char(&mut self, c: char) {
        let Some(key) = self.focused_field() else {
            return;
        };

        match key {
            FieldKey::PhoneType | FieldKey::Staff | FieldKey::EmailNotifications => {
                if c == ' ' {
                    self.cycle_choice(true);
                }
            }
            _ => {
                if let Some(current) = self.form.text(key) {
                    let mut value = current.to_string();
                    value.push(c);
                    if let Some(update) = ContactForm::text_update(key, value) {
                        self.edit(update);
                    }
                }
            }
        }
    }

    /// Handle backspace in the focused text field
    pub fn form_backspace(&mut self) {
        let Some(key) = self.focused_field() else {
            return;
        };

        if let Some(current) = self.form.text(key) {
            let mut value = current.to_string();
            if value.pop().is_some() {
                if let Some(update) = ContactForm::text_update(key, value) {
                    self.edit(update);
                }
            }
        }
    }

    /// Insert a line break when the focused field is multiline.
    /// Returns false when the focused field is single-line.
    pub fn form_newline(&mut self) -> bool {
        match self.focused_field() {
            Some(key) if key.is_multiline() => {
                self.form_input_char('\n');
                true
            }
            _ => false,
        }
    }

    /// Step the focused select, radio group or checkbox
    pub fn cycle_choice(&mut self, forward: bool) {
        let update = match self.focused_field() {
            Some(FieldKey::PhoneType) => {
                let current = self.form.phone_type;
                FieldUpdate::PhoneType(if forward { current.next() } else { current.prev() })
            }
            Some(FieldKey::Staff) => {
                let current = self.form.staff;
                FieldUpdate::Staff(if forward { current.next() } else { current.prev() })
            }
            Some(FieldKey::EmailNotifications) => {
                FieldUpdate::EmailNotifications(!self.form.email_notifications)
            }
            _ => return,
        };
        self.edit(update);
    }

    /// Validate the current form and store the result for display.
    ///
    /// Returns the snapshot to hand to the sink when the form is clean.
    pub fn prepare_submission(&mut self) -> Option<ContactForm> {
        self.errors = validate(&self.form);

        if self.errors.is_empty() {
            Some(self.form.clone())
        } else {
            let fields: Vec<_> = self.errors.iter().map(|(key, _)| key.as_str()).collect();
            tracing::debug!(?fields, "submission rejected");
            self.status = FormStatus::ErrorsShown;
            None
        }
    }

    /// Record a snapshot the sink accepted
    pub fn complete_submission(&mut self, submitted: ContactForm) {
        self.status = FormStatus::Submitted;
        self.last_submission = Some(submitted);

        if self.reset_after_submit {
            self.form = ContactForm::new();
            self.active_form_field = 0;
        }
    }

    /// Queue an error message for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
