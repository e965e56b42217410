//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a field or choice is named by string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("unknown phone type: {0}")]
    UnknownPhoneType(String),
    #[error("unknown staff role: {0}")]
    UnknownStaffRole(String),
    #[error("invalid checkbox value for {field}: {value}")]
    InvalidFlag { field: FieldKey, value: String },
}

/// Identifies one field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Name,
    Email,
    Phone,
    PhoneType,
    Staff,
    Bio,
    EmailNotifications,
}

impl FieldKey {
    /// All fields in display order
    pub const ALL: [FieldKey; 7] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::PhoneType,
        FieldKey::Staff,
        FieldKey::Bio,
        FieldKey::EmailNotifications,
    ];

    /// Wire name of the field, as used in error maps and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Phone => "phone",
            FieldKey::PhoneType => "phoneType",
            FieldKey::Staff => "staff",
            FieldKey::Bio => "bio",
            FieldKey::EmailNotifications => "emailNotifications",
        }
    }

    /// Label shown above the field
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Name => "Name: *",
            FieldKey::Email => "Email: *",
            FieldKey::Phone => "Phone Number: (XXX-XXX-XXXX)",
            FieldKey::PhoneType => "Phone Type:",
            FieldKey::Staff => "Staff:",
            FieldKey::Bio => "Bio:",
            FieldKey::EmailNotifications => "Sign up for email notifications",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKey::Bio)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Phone type select; `None` is the "Select a type" placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhoneType {
    #[default]
    #[serde(rename = "")]
    None,
    Home,
    Work,
    Mobile,
}

impl PhoneType {
    pub const OPTIONS: [PhoneType; 4] = [
        PhoneType::None,
        PhoneType::Home,
        PhoneType::Work,
        PhoneType::Mobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneType::None => "",
            PhoneType::Home => "Home",
            PhoneType::Work => "Work",
            PhoneType::Mobile => "Mobile",
        }
    }

    /// Text shown in the select
    pub fn display_label(&self) -> &'static str {
        match self {
            PhoneType::None => "Select a type",
            other => other.as_str(),
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, PhoneType::None)
    }

    /// Next option in the select (wraps around, placeholder included)
    pub fn next(self) -> Self {
        let idx = Self::OPTIONS.iter().position(|o| *o == self).unwrap_or(0);
        Self::OPTIONS[(idx + 1) % Self::OPTIONS.len()]
    }

    /// Previous option in the select (wraps around, placeholder included)
    pub fn prev(self) -> Self {
        let idx = Self::OPTIONS.iter().position(|o| *o == self).unwrap_or(0);
        if idx == 0 {
            Self::OPTIONS[Self::OPTIONS.len() - 1]
        } else {
            Self::OPTIONS[idx - 1]
        }
    }
}

impl FromStr for PhoneType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| FieldError::UnknownPhoneType(s.to_string()))
    }
}

/// Staff radio group; starts unset and cannot be unset again by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StaffRole {
    #[default]
    #[serde(rename = "")]
    None,
    Instructor,
    Student,
}

impl StaffRole {
    /// Choices rendered as radio buttons
    pub const CHOICES: [StaffRole; 2] = [StaffRole::Instructor, StaffRole::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::None => "",
            StaffRole::Instructor => "Instructor",
            StaffRole::Student => "Student",
        }
    }

    pub fn next(self) -> Self {
        match self {
            StaffRole::None | StaffRole::Student => StaffRole::Instructor,
            StaffRole::Instructor => StaffRole::Student,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            StaffRole::None | StaffRole::Instructor => StaffRole::Student,
            StaffRole::Student => StaffRole::Instructor,
        }
    }
}

impl FromStr for StaffRole {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(StaffRole::None),
            "Instructor" => Ok(StaffRole::Instructor),
            "Student" => Ok(StaffRole::Student),
            other => Err(FieldError::UnknownStaffRole(other.to_string())),
        }
    }
}

/// A single field delta applied to a form snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Phone(String),
    PhoneType(PhoneType),
    Staff(StaffRole),
    Bio(String),
    EmailNotifications(bool),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn key(&self) -> FieldKey {
        match self {
            FieldUpdate::Name(_) => FieldKey::Name,
            FieldUpdate::Email(_) => FieldKey::Email,
            FieldUpdate::Phone(_) => FieldKey::Phone,
            FieldUpdate::PhoneType(_) => FieldKey::PhoneType,
            FieldUpdate::Staff(_) => FieldKey::Staff,
            FieldUpdate::Bio(_) => FieldKey::Bio,
            FieldUpdate::EmailNotifications(_) => FieldKey::EmailNotifications,
        }
    }

    /// Build an update from a field name and its raw input value.
    ///
    /// The checkbox accepts `"true"`/`"false"`; select and radio values use
    /// their option names, with `""` meaning unset.
    pub fn parse(name: &str, value: &str) -> Result<Self, FieldError> {
        let key: FieldKey = name.parse()?;
        Ok(match key {
            FieldKey::Name => FieldUpdate::Name(value.to_string()),
            FieldKey::Email => FieldUpdate::Email(value.to_string()),
            FieldKey::Phone => FieldUpdate::Phone(value.to_string()),
            FieldKey::PhoneType => FieldUpdate::PhoneType(value.parse()?),
            FieldKey::Staff => FieldUpdate::Staff(value.parse()?),
            FieldKey::Bio => FieldUpdate::Bio(value.to_string()),
            FieldKey::EmailNotifications => match value {
                "true" => FieldUpdate::EmailNotifications(true),
                "false" => FieldUpdate::EmailNotifications(false),
                other => {
                    return Err(FieldError::InvalidFlag {
                        field: key,
                        value: other.to_string(),
                    })
                }
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_key {
        use super::*;

        #[test]
        fn test_parses_wire_names() {
            for key in FieldKey::ALL {
                assert_eq!(key.as_str().parse::<FieldKey>(), Ok(key));
            }
        }

        #[test]
        fn test_unknown_name_is_error() {
            assert_eq!(
                "address".parse::<FieldKey>(),
                Err(FieldError::UnknownField("address".to_string()))
            );
        }

        #[test]
        fn test_display_uses_wire_name() {
            assert_eq!(FieldKey::PhoneType.to_string(), "phoneType");
            assert_eq!(
                FieldKey::EmailNotifications.to_string(),
                "emailNotifications"
            );
        }

        #[test]
        fn test_only_bio_is_multiline() {
            let multiline: Vec<_> = FieldKey::ALL
                .into_iter()
                .filter(|k| k.is_multiline())
                .collect();
            assert_eq!(multiline, vec![FieldKey::Bio]);
        }
    }

    mod phone_type {
        use super::*;

        #[test]
        fn test_default_is_unselected() {
            assert_eq!(PhoneType::default(), PhoneType::None);
            assert!(!PhoneType::default().is_selected());
            assert_eq!(PhoneType::None.display_label(), "Select a type");
        }

        #[test]
        fn test_next_wraps_through_placeholder() {
            assert_eq!(PhoneType::None.next(), PhoneType::Home);
            assert_eq!(PhoneType::Mobile.next(), PhoneType::None);
        }

        #[test]
        fn test_prev_wraps() {
            assert_eq!(PhoneType::None.prev(), PhoneType::Mobile);
            assert_eq!(PhoneType::Work.prev(), PhoneType::Home);
        }

        #[test]
        fn test_parse_empty_is_none() {
            assert_eq!("".parse::<PhoneType>(), Ok(PhoneType::None));
            assert_eq!("Work".parse::<PhoneType>(), Ok(PhoneType::Work));
            assert!("Fax".parse::<PhoneType>().is_err());
        }
    }

    mod staff_role {
        use super::*;

        #[test]
        fn test_cycle_never_returns_to_none() {
            assert_eq!(StaffRole::None.next(), StaffRole::Instructor);
            assert_eq!(StaffRole::Instructor.next(), StaffRole::Student);
            assert_eq!(StaffRole::Student.next(), StaffRole::Instructor);
            assert_eq!(StaffRole::None.prev(), StaffRole::Student);
        }

        #[test]
        fn test_parse() {
            assert_eq!("Student".parse::<StaffRole>(), Ok(StaffRole::Student));
            assert_eq!(
                "Admin".parse::<StaffRole>(),
                Err(FieldError::UnknownStaffRole("Admin".to_string()))
            );
        }
    }

    mod field_update {
        use super::*;

        #[test]
        fn test_parse_text_field() {
            assert_eq!(
                FieldUpdate::parse("name", "Jo"),
                Ok(FieldUpdate::Name("Jo".to_string()))
            );
        }

        #[test]
        fn test_parse_choice_fields() {
            assert_eq!(
                FieldUpdate::parse("phoneType", "Mobile"),
                Ok(FieldUpdate::PhoneType(PhoneType::Mobile))
            );
            assert_eq!(
                FieldUpdate::parse("staff", ""),
                Ok(FieldUpdate::Staff(StaffRole::None))
            );
        }

        #[test]
        fn test_parse_checkbox() {
            assert_eq!(
                FieldUpdate::parse("emailNotifications", "true"),
                Ok(FieldUpdate::EmailNotifications(true))
            );
            assert!(matches!(
                FieldUpdate::parse("emailNotifications", "yes"),
                Err(FieldError::InvalidFlag { .. })
            ));
        }

        #[test]
        fn test_key_matches_variant() {
            let update = FieldUpdate::Bio(String::new());
            assert_eq!(update.key(), FieldKey::Bio);
        }
    }
}
