use std::fmt;

use bytes::Bytes;
use thiserror::Error;

/// Failure taxonomy of the fetch-decode service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeError {
    #[error("invalid recipe data: {0}")]
    InvalidData(InvalidDataKind),
    #[error("the catalog contains no recipes")]
    EmptyRecipes,
    #[error("{0}")]
    NetworkError(TransportFault),
}

/// Why data was rejected. Never carries raw decoder diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDataKind {
    MalformedEndpoint,
    MalformedPayload,
    IncompleteRecipe { id: String },
}

impl fmt::Display for InvalidDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDataKind::MalformedEndpoint => write!(f, "malformed endpoint"),
            InvalidDataKind::MalformedPayload => write!(f, "malformed payload"),
            InvalidDataKind::IncompleteRecipe { id } => {
                write!(f, "recipe {id} has an empty name or cuisine")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub body: Bytes,
    pub content_type: Option<String>,
}

/// Transport-level failure with a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportFault {
    pub kind: FaultKind,
    pub message: String,
}

impl TransportFault {
    pub(crate) fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultKind {
    HttpStatus(u16),
    Timeout,
    Connect,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::HttpStatus(code) => write!(f, "http status {code}"),
            FaultKind::Timeout => write!(f, "timeout"),
            FaultKind::Connect => write!(f, "connection failed"),
            FaultKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FaultKind::Network => write!(f, "network error"),
        }
    }
}
