//! Infrastructure layer for the ELSYSER client
//!
//! This module contains the implementations for external concerns like
//! logging setup and shared log message text.

pub mod log_messages;
pub mod logging;
