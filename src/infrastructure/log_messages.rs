//! Log message constants
//!
//! This module centralizes the log messages used by the client so that the
//! wording stays consistent between the library and the command-line tool.

/// Command-line tool lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting ELSYSER client";
    pub const CONFIG_LOADED: &str = "Configuration loaded";
}

/// Form validation messages
pub mod forms {
    pub const FIELD_REJECTED: &str = "Form field rejected";
    pub const FORM_ACCEPTED: &str = "Form accepted";
    pub const FORM_REJECTED: &str = "Form rejected";
    pub const PAYLOAD_NOT_OBJECT: &str = "form payload must be a JSON object";
    pub const READING_PAYLOAD: &str = "Reading form payload";
}

/// Routing messages
pub mod routing {
    pub const ROUTE_RESOLVED: &str = "Route resolved";
    pub const UNKNOWN_ROUTE: &str = "No route matches fragment";
}
