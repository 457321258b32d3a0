// Imports
use thiserror::Error;

/// Errors raised by descriptor constructors and setters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A field received a value of the wrong semantic type, or a value the rule set rejects.
    #[error("invalid argument for field `{field}`: {reason}")]
    InvalidArgument {
        /// The name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ShapeError {
    /// Shorthand for [ShapeError::InvalidArgument].
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The field that triggered the error.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidArgument { field, .. } => field,
        }
    }
}
