//! Contact form snapshot and its update rules

use super::field::{FieldError, FieldKey, FieldUpdate, PhoneType, StaffRole};
use serde::{Deserialize, Serialize};

/// Maximum bio length in characters
pub const BIO_MAX_CHARS: usize = 280;

/// Current values of every contact form field.
///
/// Snapshots are replaced, never edited in place: [`ContactForm::apply`]
/// returns a new value and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub phone_type: PhoneType,
    pub staff: StaffRole,
    pub bio: String,
    pub email_notifications: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `update` may be applied. Only an oversized bio is refused.
    pub fn accepts(&self, update: &FieldUpdate) -> bool {
        match update {
            FieldUpdate::Bio(bio) => bio.chars().count() <= BIO_MAX_CHARS,
            _ => true,
        }
    }

    /// Copy this snapshot with one field overridden.
    ///
    /// A bio longer than [`BIO_MAX_CHARS`] is dropped and the copy equals
    /// `self`.
    pub fn apply(&self, update: FieldUpdate) -> Self {
        if !self.accepts(&update) {
            return self.clone();
        }

        let mut next = self.clone();
        match update {
            FieldUpdate::Name(v) => next.name = v,
            FieldUpdate::Email(v) => next.email = v,
            FieldUpdate::Phone(v) => next.phone = v,
            FieldUpdate::PhoneType(v) => next.phone_type = v,
            FieldUpdate::Staff(v) => next.staff = v,
            FieldUpdate::Bio(v) => next.bio = v,
            FieldUpdate::EmailNotifications(v) => next.email_notifications = v,
        }
        next
    }

    /// Apply a raw `(name, value)` pair, as delivered by an input binding.
    ///
    /// String-keyed entry point for callers embedding the form outside the
    /// terminal UI, which edits through typed [`FieldUpdate`]s instead.
    #[allow(dead_code)]
    pub fn update_field(&self, name: &str, value: &str) -> Result<Self, FieldError> {
        Ok(self.apply(FieldUpdate::parse(name, value)?))
    }

    /// Text value of a free-text field, `None` for choice fields
    pub fn text(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::Name => Some(&self.name),
            FieldKey::Email => Some(&self.email),
            FieldKey::Phone => Some(&self.phone),
            FieldKey::Bio => Some(&self.bio),
            FieldKey::PhoneType | FieldKey::Staff | FieldKey::EmailNotifications => None,
        }
    }

    /// Build the update that replaces a free-text field with `value`
    pub fn text_update(key: FieldKey, value: String) -> Option<FieldUpdate> {
        match key {
            FieldKey::Name => Some(FieldUpdate::Name(value)),
            FieldKey::Email => Some(FieldUpdate::Email(value)),
            FieldKey::Phone => Some(FieldUpdate::Phone(value)),
            FieldKey::Bio => Some(FieldUpdate::Bio(value)),
            FieldKey::PhoneType | FieldKey::Staff | FieldKey::EmailNotifications => None,
        }
    }

    pub fn bio_chars_remaining(&self) -> usize {
        BIO_MAX_CHARS.saturating_sub(self.bio.chars().count())
    }
}
