//! Error types for query execution.
//!
//! Tool handlers fail in exactly two ways: a referenced record does not
//! exist, or a recognized argument cannot be interpreted. Both are
//! application-level failures — the dispatcher turns them into an
//! `isError` tool payload, never a protocol error.

use thiserror::Error;

/// A failure raised while executing a tool query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A named record (or tool) was looked up and not found.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// A recognized argument was present but unusable.
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },
}

impl QueryError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for a schema-declared argument that was omitted.
    pub fn missing(field: &'static str) -> Self {
        Self::InvalidArgument {
            field,
            reason: "required parameter is missing".to_string(),
        }
    }
}

/// Result alias used throughout the query pipeline.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = QueryError::not_found("employee", "emp_999");
        assert_eq!(err.to_string(), "employee not found: emp_999");

        let err = QueryError::invalid_argument("team", "expected a string");
        assert_eq!(err.to_string(), "invalid argument `team`: expected a string");
    }
}
