//! Error type shared by both solvers.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the public entry points.
///
/// All validation runs before any algorithmic work, so an error always
/// describes the first offending input and no partial result exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter violates its documented domain.
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput {
        /// The offending field, e.g. `jobs[2].priority`.
        field: String,
        /// The constraint that was violated.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Error::InvalidInput { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field_and_reason() {
        let err = Error::invalid("prices", "length must equal rod length");
        assert_eq!(
            err.to_string(),
            "invalid input `prices`: length must equal rod length"
        );
        assert_eq!(err.field(), "prices");
    }
}
