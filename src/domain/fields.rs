//! Form field kinds and validated field values
//!
//! `FieldKind` ties each kind of form input to its acceptance rule and to the
//! message shown when input is rejected. The newtypes below can only be built
//! from accepted input, so a form holding them is safe to submit.

use crate::domain::coercion::{as_text, coerce_to_text};
use crate::domain::validator;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The kinds of input the client validates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    Name,
    Password,
    Title,
    Content,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Email,
        FieldKind::Name,
        FieldKind::Password,
        FieldKind::Title,
        FieldKind::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Name => "name",
            FieldKind::Password => "password",
            FieldKind::Title => "title",
            FieldKind::Content => "content",
        }
    }

    /// Whether `value` satisfies this kind's rule
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FieldKind::Email => validator::is_valid_email(value),
            FieldKind::Name => validator::is_valid_name(value),
            FieldKind::Password => validator::is_valid_password(value),
            FieldKind::Title => validator::is_valid_title(value),
            FieldKind::Content => validator::is_valid_content(value),
        }
    }

    /// Whether a loosely-typed form value satisfies this kind's rule.
    ///
    /// Email and password read the value through its browser string form, so
    /// the number `123456` is an acceptable password. Name, title and content
    /// accept nothing but strings.
    pub fn accepts_value(&self, value: Option<&Value>) -> bool {
        match self {
            FieldKind::Email | FieldKind::Password => self.accepts(&coerce_to_text(value)),
            FieldKind::Name | FieldKind::Title | FieldKind::Content => {
                as_text(value).is_some_and(|text| self.accepts(text))
            }
        }
    }

    /// Message shown to the user when input of this kind is rejected
    pub fn rejection_message(&self) -> &'static str {
        match self {
            FieldKind::Email => "Please enter a valid email address!",
            FieldKind::Name => "Names must be between 3 and 30 characters long!",
            FieldKind::Password => {
                "Passwords must be 6 to 16 letters, digits or '!' and contain at least one digit!"
            }
            FieldKind::Title => "Titles must be between 3 and 60 characters long!",
            FieldKind::Content => "Content must be between 5 and 1000 characters long!",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(FieldKind::Email),
            "name" | "username" => Ok(FieldKind::Name),
            "password" => Ok(FieldKind::Password),
            "title" => Ok(FieldKind::Title),
            "content" => Ok(FieldKind::Content),
            _ => Err(format!("Invalid field kind: {s}")),
        }
    }
}

/// Email address accepted by the email rule
#[nutype(
    validate(predicate = |email| validator::is_valid_email(email)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct EmailAddress(String);

/// Username or other personal name
#[nutype(
    validate(predicate = |name| validator::is_valid_name(name)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Name(String);

/// Password accepted by the password rule (secured)
#[nutype(
    validate(predicate = |password| validator::is_valid_password(password)),
    derive(Clone, PartialEq, Eq, Serialize, Deserialize, AsRef)
)]
pub struct Password(String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

/// News title
#[nutype(
    validate(predicate = |title| validator::is_valid_title(title)),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct Title(String);

/// Body of a news post or comment
#[nutype(
    validate(predicate = |content| validator::is_valid_content(content)),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct Content(String);
