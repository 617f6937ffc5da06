//! Domain types and business logic for the ELSYSER client
//!
//! This module contains the rules that decide which form input is accepted,
//! the forms built from them, and the route table of the client.

pub mod coercion;
pub mod config_types;
pub mod fields;
pub mod forms;
pub mod routes;
pub mod validation_constants;
pub mod validator;

pub use fields::*;
pub use forms::*;
pub use routes::*;
pub use validator::*;
