use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionErrorKind {
    InvalidArgument,
    SelectionReference,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionError {
    pub kind: ResolutionErrorKind,
    pub message: String,
}

impl ResolutionError {
    pub fn new(kind: ResolutionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ResolutionError {}

pub fn invalid_argument(message: impl Into<String>) -> ResolutionError {
    ResolutionError::new(ResolutionErrorKind::InvalidArgument, message)
}

pub fn selection_reference(message: impl Into<String>) -> ResolutionError {
    ResolutionError::new(ResolutionErrorKind::SelectionReference, message)
}

pub fn internal_error(message: impl Into<String>) -> ResolutionError {
    ResolutionError::new(ResolutionErrorKind::Internal, message)
}
