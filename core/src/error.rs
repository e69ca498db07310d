//! Error types for the notes API client.
//!
//! # Design
//! Each remote operation has its own failure variant so the controller can
//! surface a message naming what went wrong. The response body of a failed
//! request is never inspected; only the status code is kept, for logging.

use std::fmt;

use thiserror::Error;

/// The four remote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// The failure this operation reports for a non-2xx `status`.
    pub fn failure(self, status: u16) -> ApiError {
        match self {
            Operation::List => ApiError::Fetch { status },
            Operation::Create => ApiError::Create { status },
            Operation::Update => ApiError::Update { status },
            Operation::Delete => ApiError::Delete { status },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Errors returned by the access layer and recorded by the controller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Listing notes returned a non-2xx status.
    #[error("Failed to fetch notes")]
    Fetch { status: u16 },

    #[error("Failed to create note")]
    Create { status: u16 },

    #[error("Failed to update note")]
    Update { status: u16 },

    #[error("Failed to delete note")]
    Delete { status: u16 },

    /// A 2xx response carried a body that is not the expected JSON.
    #[error("malformed response body: {0}")]
    Parse(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(String),

    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("request failed: {0}")]
    Transport(String),

    /// The draft was rejected locally; nothing was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status for the per-operation failures, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Fetch { status }
            | ApiError::Create { status }
            | ApiError::Update { status }
            | ApiError::Delete { status } => Some(*status),
            _ => None,
        }
    }
}
