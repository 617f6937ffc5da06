//! Field-acceptance predicates
//!
//! Every form in the client is gated by these five checks before a request
//! is issued. Each one is total: it answers `true` or `false` for any input
//! and keeps no state between calls.
//!
//! Lengths are measured in UTF-16 code units, which is how the browser
//! counts the characters a user typed into a form field.

use crate::domain::validation_constants::{content, email, name, password, title};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&email::pattern()).expect("email pattern is a valid regex"));

static PASSWORD_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(password::CHARSET_PATTERN).expect("password pattern is a valid regex")
});

/// Length of `value` in UTF-16 code units
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn len_within(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&utf16_len(value))
}

/// Accepts `local@domain` where the domain ends in a label of two or more characters.
///
/// The local part is either dot-separated atoms or a double-quoted string.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Accepts names of 3 to 30 characters.
pub fn is_valid_name(value: &str) -> bool {
    len_within(value, name::MIN_LENGTH, name::MAX_LENGTH)
}

/// Accepts 6 to 16 letters, digits or `!`, with at least one digit.
///
/// Neither a capital letter nor a special character is required.
pub fn is_valid_password(value: &str) -> bool {
    PASSWORD_CHARSET.is_match(value) && value.bytes().any(|b| b.is_ascii_digit())
}

/// Accepts news titles of 3 to 60 characters.
pub fn is_valid_title(value: &str) -> bool {
    len_within(value, title::MIN_LENGTH, title::MAX_LENGTH)
}

/// Accepts news and comment bodies of 5 to 1000 characters.
pub fn is_valid_content(value: &str) -> bool {
    len_within(value, content::MIN_LENGTH, content::MAX_LENGTH)
}
