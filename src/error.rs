//! Error types for pagination
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations. Pagination is pure and deterministic, so
//! every failure is surfaced directly to the caller; nothing is retried or
//! swallowed.

use thiserror::Error;

/// Result type alias for pagination operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by [`paginate`](crate::paginate::paginate)
#[derive(Error, Debug)]
pub enum Error {
    /// The page height precondition was violated
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The input tree carries non-finite or negative geometry
    #[error("malformed input: {message}")]
    MalformedInput { message: String },
}
