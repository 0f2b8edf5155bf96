//! Errors raised by partial sequence operations.

use thiserror::Error;

/// Raised when an operation that needs at least one element is applied to
/// [`Sequence::Empty`](crate::Sequence::Empty).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{operation} called on an empty sequence")]
pub struct EmptyStructureError {
    /// Name of the rejected operation.
    pub operation: &'static str,
}

impl EmptyStructureError {
    pub(crate) fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

/// Result type for operations that can reject an empty sequence.
pub type Result<T> = std::result::Result<T, EmptyStructureError>;
