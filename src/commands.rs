//! Command logic behind the `elsyser_client` binary
//!
//! Each command returns the lines to print and whether it succeeded, so the
//! binary only parses arguments and writes output.

use crate::domain::{ApiEndpoints, FieldKind, FormKind, Route};
use crate::error::{Error, Result};
use crate::infrastructure::log_messages;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, warn};

/// Whether a command's input was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Output of a command: lines for stdout and the resulting status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub status: Status,
}

impl Outcome {
    fn success(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            status: Status::Success,
        }
    }
}

/// Reads a JSON payload from `file`, or from `input` when no file is given
pub fn read_payload(file: Option<&Path>, mut input: impl Read) -> Result<Value> {
    debug!("{}", log_messages::forms::READING_PAYLOAD);
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            input.read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

/// Validates `payload` as `form`; one output line per rejected field.
///
/// An accepted comment still fails without the news item it belongs to.
pub fn check_form(
    api: &ApiEndpoints,
    form: FormKind,
    payload: &Value,
    news_id: Option<u64>,
) -> Result<Outcome> {
    match form.validate(payload) {
        Ok(()) => {
            let endpoint = form.endpoint(api, news_id).ok_or(Error::MissingNewsId)?;
            Ok(Outcome::success(format!("ok: POST {endpoint}")))
        }
        Err(Error::InvalidForm { rejections }) => {
            info!(%form, rejected = rejections.len(), "{}", log_messages::forms::FORM_REJECTED);
            Ok(Outcome {
                lines: rejections.iter().map(ToString::to_string).collect(),
                status: Status::Failure,
            })
        }
        Err(err) => Err(err),
    }
}

/// Checks a single text value against `kind`
pub fn check_field(kind: FieldKind, value: &str) -> Outcome {
    if kind.accepts(value) {
        Outcome::success("valid")
    } else {
        Outcome {
            lines: vec!["invalid".to_string()],
            status: Status::Failure,
        }
    }
}

/// Resolves `fragment` and reports its canonical form
pub fn resolve_route(fragment: &str) -> Result<Outcome> {
    match Route::resolve(fragment) {
        Ok(route) => {
            debug!(%route, "{}", log_messages::routing::ROUTE_RESOLVED);
            Ok(Outcome::success(route.fragment()))
        }
        Err(err) => {
            warn!(%fragment, "{}", log_messages::routing::UNKNOWN_ROUTE);
            Err(err)
        }
    }
}
