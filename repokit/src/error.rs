//! Repository error types
//!
//! Every fallible operation in this crate surfaces a [`RepositoryError`].
//! Errors are structured rather than stringly typed so callers can match on
//! the failure category and recover the model name, identifier, or attribute
//! involved.
//!
//! # Example
//!
//! ```rust
//! use repokit::error::RepositoryError;
//!
//! let error = RepositoryError::not_found("Article", 42);
//! assert!(error.is_not_found());
//! assert_eq!(error.to_string(), "Article not found [id: 42]");
//! ```

use std::fmt;

use thiserror::Error;

/// Convenience alias for repository results.
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Operation being performed when a repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Fetching a filtered, ordered, windowed collection
    GetCollection,
    /// Counting records matching a filter
    Count,
    /// Fetching a single record by identifier
    GetItem,
    /// Checking whether an identifier is present
    Exists,
    /// Creating a new record
    Create,
    /// Updating an existing record
    Update,
    /// Deleting a record
    Delete,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetCollection => write!(f, "get_collection"),
            Self::Count => write!(f, "count"),
            Self::GetItem => write!(f, "get_item"),
            Self::Exists => write!(f, "exists"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Structured error raised by repositories and the query engines they share
///
/// The variants mirror the failure categories of the crate: identifier misses,
/// uniqueness conflicts detected by a pre-mutation check, malformed operands,
/// unrecognized operator tokens, and attribute names a record type does not
/// carry.
///
/// # Example
///
/// ```rust
/// use repokit::error::{RepositoryError, RepositoryOperation};
///
/// let error = RepositoryError::uniqueness_violation(
///     "Account",
///     RepositoryOperation::Create,
///     "username `kim` already taken",
/// );
/// println!("{error}");
/// // uniqueness violation during create on Account: username `kim` already taken
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No record carries the requested identifier
    #[error("{model} not found [id: {id}]")]
    NotFound {
        /// Model name of the record type that was searched
        model: &'static str,
        /// The identifier that missed, rendered for diagnostics
        id: String,
    },

    /// A pre-mutation check found the input colliding with an existing record
    #[error("uniqueness violation during {operation} on {model}: {detail}")]
    UniquenessViolation {
        /// Model name of the record type being mutated
        model: &'static str,
        /// The mutating operation that was rejected
        operation: RepositoryOperation,
        /// Which input collided, and with what
        detail: String,
    },

    /// An operand does not fit its operator, or two values cannot be compared
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operator token could not be recognized
    #[error("unsupported operator `{0}`")]
    UnsupportedOperator(String),

    /// A specification or order key names an attribute the record type lacks
    #[error("{model} has no attribute `{attribute}`")]
    AttributeNotFound {
        /// Model name of the record type that was probed
        model: &'static str,
        /// The attribute name that missed
        attribute: String,
    },
}

impl RepositoryError {
    /// Create a "not found" error for the given model and identifier
    ///
    /// The identifier is captured through its `Display` rendering, so any
    /// identifier type a repository uses can be attached.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repokit::error::RepositoryError;
    ///
    /// let error = RepositoryError::not_found("Article", 7);
    /// assert_eq!(error.to_string(), "Article not found [id: 7]");
    /// ```
    pub fn not_found(model: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            model,
            id: id.to_string(),
        }
    }

    /// Create a uniqueness-violation error with operation context
    ///
    /// # Example
    ///
    /// ```rust
    /// use repokit::error::{RepositoryError, RepositoryOperation};
    ///
    /// let error = RepositoryError::uniqueness_violation(
    ///     "User",
    ///     RepositoryOperation::Update,
    ///     "email `a@example.com` already in use",
    /// );
    /// ```
    pub fn uniqueness_violation(
        model: &'static str,
        operation: RepositoryOperation,
        detail: impl Into<String>,
    ) -> Self {
        Self::UniquenessViolation {
            model,
            operation,
            detail: detail.into(),
        }
    }

    /// Create an invalid-argument error
    ///
    /// Raised when an operand does not fit its operator, for example a scalar
    /// handed to `IN`, or when two values of incompatible types are compared.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an unsupported-operator error for an unrecognized token
    ///
    /// # Example
    ///
    /// ```rust
    /// use repokit::error::RepositoryError;
    ///
    /// let error = RepositoryError::unsupported_operator("=~");
    /// assert_eq!(error.to_string(), "unsupported operator `=~`");
    /// ```
    pub fn unsupported_operator(token: impl Into<String>) -> Self {
        Self::UnsupportedOperator(token.into())
    }

    /// Create an attribute-not-found error for the given model and attribute
    pub fn attribute_not_found(model: &'static str, attribute: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            model,
            attribute: attribute.into(),
        }
    }

    /// Check whether this error is an identifier miss
    ///
    /// Useful for callers that treat "not there" as a regular outcome, the
    /// way `exists` does internally.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
