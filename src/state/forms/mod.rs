//! Form domain layer
//!
//! Plain data and pure functions for the contact form: field values,
//! copy-with-override updates, and validation. Nothing here touches the
//! terminal.

mod field;
mod form_state;
mod validation;

pub use field::{FieldError, FieldKey, FieldUpdate, PhoneType, StaffRole};
pub use form_state::{ContactForm, BIO_MAX_CHARS};
pub use validation::{validate, ErrorMap};
