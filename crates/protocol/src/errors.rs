//! Protocol errors module

use thiserror::Error;

/// Reasons an inbound fruit payload was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body is not valid JSON: {reason}")]
    MalformedJson { reason: String },

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Invalid fruit: {}", .reasons.join("; "))]
    InvalidFields { reasons: Vec<String> },
}

impl ValidationError {
    /// Every rule the payload violated, one entry per field.
    pub fn reasons(&self) -> Vec<String> {
        match self {
            ValidationError::InvalidFields { reasons } => reasons.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::MalformedJson {
            reason: err.to_string(),
        }
    }
}

/// A path segment that is not a positive base-10 integer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedIdError {
    #[error("Fruit id must not be empty")]
    Empty,

    #[error("Fruit id '{raw}' is not a base-10 integer")]
    NotNumeric { raw: String },

    #[error("Fruit id must be positive")]
    Zero,

    #[error("Fruit id '{raw}' is out of range")]
    OutOfRange { raw: String },
}
