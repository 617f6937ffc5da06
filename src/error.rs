use crate::domain::forms::FieldRejection;
use thiserror::Error;

/// ELSYSER client error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid form: {}", describe_rejections(.rejections))]
    InvalidForm { rejections: Vec<FieldRejection> },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("A news id is required to submit a comment")]
    MissingNewsId,
}

impl Error {
    pub fn malformed_payload(reason: impl Into<String>) -> Self {
        Self::MalformedPayload(reason.into())
    }

    /// Rejected fields, if this is a form validation failure
    pub fn rejections(&self) -> &[FieldRejection] {
        match self {
            Self::InvalidForm { rejections } => rejections,
            _ => &[],
        }
    }
}

fn describe_rejections(rejections: &[FieldRejection]) -> String {
    rejections
        .iter()
        .map(|r| r.field)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
