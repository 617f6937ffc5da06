//! ELSYSER client - form validation and routing for the ELSYSER news client
//!
//! Every form of the client is checked against a small set of field rules
//! before anything is sent to the news API. The rules live in
//! [`domain::validator`]; forms, routes and API endpoints build on them.

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use config::Settings;
pub use error::{Error, Result};
