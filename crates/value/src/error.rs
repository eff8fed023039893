//! Error values for vega-value.
//!
//! Failures in the value model are ordinary values, not panics: every
//! fallible operation returns an [`Error`] (directly, or wrapped in a
//! `Value::Error`), and callers decide what to do with it. An `Error`
//! carries a kind from a closed set plus an optional diagnostic message;
//! equality considers the kind only.

use std::fmt;

use crate::text::Text;

/// Closed set of error kinds.
///
/// The first three are the core vocabulary every collaborator shares;
/// the rest cover states a callable or registry can reach at runtime.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ErrorKind {
    /// Wrong arity, wrong argument type, or failed conversion
    #[error("illegal argument")]
    IllegalArgument,

    /// Index or numeric range violation
    #[error("out of range")]
    OutOfRange,

    /// Runtime type test failed where a specific type was required
    #[error("type mismatch")]
    TypeMismatch,

    /// Operation invoked in a state that cannot serve it
    #[error("illegal state")]
    IllegalState,

    /// Operation not provided by the receiver
    #[error("unsupported operation")]
    UnsupportedOperation,
}

/// A recoverable failure, carried as a value.
///
/// Immutable once constructed. The message is diagnostic only: two errors
/// of the same kind are equal regardless of their messages.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<Text>,
}

impl Error {
    /// Create an error with no message.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Create an error with a diagnostic message.
    pub fn with_message(kind: ErrorKind, message: impl Into<Text>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Create an illegal-argument error
    pub fn illegal_argument(message: impl Into<Text>) -> Self {
        Self::with_message(ErrorKind::IllegalArgument, message)
    }

    /// Create an out-of-range error for an index access
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::with_message(
            ErrorKind::OutOfRange,
            format!("index {index} out of bounds (length: {length})"),
        )
    }

    /// Create an out-of-range error for a numeric narrowing
    pub fn numeric_out_of_range(value: impl fmt::Display, target: &str) -> Self {
        Self::with_message(
            ErrorKind::OutOfRange,
            format!("value {value} does not fit in {target}"),
        )
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::with_message(
            ErrorKind::TypeMismatch,
            format!("expected {expected}, got {actual}"),
        )
    }

    /// Create an illegal-state error
    pub fn illegal_state(message: impl Into<Text>) -> Self {
        Self::with_message(ErrorKind::IllegalState, message)
    }

    /// Create an unsupported-operation error
    pub fn unsupported_operation(message: impl Into<Text>) -> Self {
        Self::with_message(ErrorKind::UnsupportedOperation, message)
    }

    /// The error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The diagnostic message, if one was attached.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Kind-only equality: the message is diagnostic, not semantic.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.kind, message),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type alias for value operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equality_compares_kind_only() {
        let bare = Error::new(ErrorKind::IllegalArgument);
        let verbose = Error::illegal_argument("expected a number");
        assert_eq!(bare, verbose);
        assert_ne!(bare, Error::new(ErrorKind::OutOfRange));
    }

    #[test]
    fn display_includes_message_when_present() {
        let err = Error::index_out_of_bounds(5, 3);
        assert_eq!(err.to_string(), "out of range: index 5 out of bounds (length: 3)");
        assert_eq!(Error::new(ErrorKind::TypeMismatch).to_string(), "type mismatch");
    }

    #[test]
    fn construction_helpers_set_kinds() {
        assert_eq!(
            Error::type_mismatch("integer", "text").kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            Error::unsupported_operation("no such function").kind(),
            ErrorKind::UnsupportedOperation
        );
        assert_eq!(
            Error::numeric_out_of_range(1e300, "i64").kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn errors_are_inert_values() {
        let err = Error::illegal_argument("probe");
        let copy = err.clone();
        assert_eq!(err, copy);
        assert_eq!(copy.message(), Some("probe"));
    }
}
