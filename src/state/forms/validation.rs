//! Contact form validation

use super::field::FieldKey;
use super::form_state::{ContactForm, BIO_MAX_CHARS};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_FORMAT: &str = "Phone number must be in format: XXX-XXX-XXXX";
pub const PHONE_TYPE_REQUIRED: &str = "Please select a phone type";
pub const BIO_TOO_LONG: &str = "Bio must not exceed 280 characters";

// local@domain.tld, no whitespace or extra '@' in any part.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// XXX-XXX-XXXX with ASCII digits only.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("PHONE_REGEX: invalid regex pattern")
});

/// Field-to-message map of current validation failures.
///
/// A field missing from the map is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMap(BTreeMap<FieldKey, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn remove(&mut self, key: FieldKey) -> Option<String> {
        self.0.remove(&key)
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Whitespace the way browsers trim form input: Unicode `White_Space`
/// except NEL (U+0085), plus the byte order mark (U+FEFF).
fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// True when `value` is empty once trimmed
fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}

/// Check every rule against `form` and collect all failures.
pub fn validate(form: &ContactForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if is_blank(&form.name) {
        errors.insert(FieldKey::Name, NAME_REQUIRED);
    }

    if is_blank(&form.email) {
        errors.insert(FieldKey::Email, EMAIL_REQUIRED);
    } else if !EMAIL_REGEX.is_match(&form.email) {
        errors.insert(FieldKey::Email, EMAIL_INVALID);
    }

    if !is_blank(&form.phone) {
        if !PHONE_REGEX.is_match(&form.phone) {
            errors.insert(FieldKey::Phone, PHONE_FORMAT);
        }
        if !form.phone_type.is_selected() {
            errors.insert(FieldKey::PhoneType, PHONE_TYPE_REQUIRED);
        }
    }

    if form.bio.chars().count() > BIO_MAX_CHARS {
        errors.insert(FieldKey::Bio, BIO_TOO_LONG);
    }

    errors
}
