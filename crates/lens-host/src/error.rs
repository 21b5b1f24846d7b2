//! Structural read errors.

use thiserror::Error;

/// Errors raised while reading a snapshot out of a host value tree.
///
/// Value-level oddities (bad square indices, overlapping bitboards) are not
/// errors; the codecs render them. These variants cover values whose shape
/// makes decoding impossible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Could not find '{0}' field")]
    MissingField(String),

    #[error("Could not find '{field}' field in {parent}")]
    MissingNestedField { field: String, parent: String },

    #[error("Could not find element {index} of '{field}'")]
    MissingElement { field: String, index: usize },

    #[error("field '{field}' is not {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
    },

    #[error("unknown castling rights value in '{0}'")]
    UnknownCastlingRights(String),
}

impl HostError {
    /// True when the error is an absent field or element rather than a
    /// present field with an unusable value.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            HostError::MissingField(_)
                | HostError::MissingNestedField { .. }
                | HostError::MissingElement { .. }
        )
    }

    pub(crate) fn invalid(field: &str, expected: &'static str) -> Self {
        HostError::InvalidValue {
            field: field.to_string(),
            expected,
        }
    }
}
