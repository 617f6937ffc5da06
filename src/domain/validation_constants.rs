//! Validation constants for form fields
//!
//! This module centralizes the length bounds and patterns that decide which
//! form input is accepted before anything is sent to the API. Changing a value
//! here changes what users can submit, so every bound is pinned by a test.

/// Email validation constants
pub mod email {
    /// Characters an unquoted local-part atom or a domain label may not contain,
    /// besides whitespace.
    const ATOM_EXCLUDED: &str = r#"<>()\[\].,;:@""#;

    /// Whitespace as recognised by browser regular expressions (`\s`).
    ///
    /// Spelled out because the regex crate's `\s` is Unicode `White_Space`,
    /// which includes U+0085 and leaves out U+FEFF.
    const WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

    /// Line terminators that `.` refuses to match in browser regular expressions.
    const LINE_TERMINATORS: &str = r"\n\r\x{2028}\x{2029}";

    /// Full email pattern.
    ///
    /// The final domain label needs at least two UTF-16 code units, so a single
    /// astral-plane character is enough on its own.
    pub fn pattern() -> String {
        let atom = format!("[^{ATOM_EXCLUDED}{WHITESPACE}]");
        format!(
            r#"^(?:{atom}+(?:\.{atom}+)*|"[^{LINE_TERMINATORS}]+")@(?:{atom}+\.)+(?:{atom}{{2,}}|[\x{{10000}}-\x{{10FFFF}}])$"#
        )
    }
}

/// Name validation constants
pub mod name {
    /// Minimum name length in UTF-16 code units
    pub const MIN_LENGTH: usize = 3;

    /// Maximum name length in UTF-16 code units
    pub const MAX_LENGTH: usize = 30;
}

/// Password validation constants
pub mod password {
    /// Minimum password length
    pub const MIN_LENGTH: usize = 6;

    /// Maximum password length
    pub const MAX_LENGTH: usize = 16;

    /// Allowed character set and length; the digit requirement is checked separately
    /// because the regex crate has no lookahead.
    pub const CHARSET_PATTERN: &str = r"^[a-zA-Z0-9!]{6,16}$";
}

/// News title validation constants
pub mod title {
    /// Minimum title length in UTF-16 code units
    pub const MIN_LENGTH: usize = 3;

    /// Maximum title length in UTF-16 code units
    pub const MAX_LENGTH: usize = 60;
}

/// News and comment body validation constants
pub mod content {
    /// Minimum content length in UTF-16 code units
    pub const MIN_LENGTH: usize = 5;

    /// Maximum content length in UTF-16 code units
    pub const MAX_LENGTH: usize = 1000;
}
