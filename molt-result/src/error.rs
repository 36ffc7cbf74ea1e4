use std::fmt;

use thiserror::Error;

/// Unified error type for all MOLT operations.
///
/// This enum encompasses every failure mode across the MOLT stack, from column
/// resolution through type unification to row expansion. Each variant includes
/// context-specific information to help diagnose and handle the error.
///
/// # Error Handling Strategy
///
/// Errors propagate upward through the call stack using Rust's `?` operator. At API
/// boundaries errors are typically converted to user-friendly messages; internal
/// code can match on specific variants for fine-grained handling.
///
/// # Thread Safety
///
/// `Error` implements `Send` and `Sync`, allowing errors to cross thread boundaries.
/// This matters because value-column blocks may be expanded on worker threads.
#[derive(Error, Debug)]
pub enum Error {
    /// A column named by a selection does not exist in the relevant schema.
    ///
    /// This is the resolution failure surfaced whenever an explicit column list
    /// references a name the schema lacks, whether at eager resolution, lazy
    /// schema inference, or plan execution. Pattern-based selections that match
    /// zero columns do *not* produce this error; zero matches is a valid outcome.
    ///
    /// # Recovery
    ///
    /// Typically a user error. Fix the selection and retry.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// An operation is invalid for the data it was asked to process.
    ///
    /// This error occurs when:
    /// - The selected value columns share no common supertype (e.g. a nested
    ///   list type mixed with scalars)
    /// - A column cannot be cast into the unified value type
    ///
    /// The operation aborts atomically; no partial output is ever returned.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Arrow library error during columnar data operations.
    ///
    /// This error occurs when building Arrow arrays, concatenating blocks, or
    /// assembling output batches. Arrow is the underlying columnar memory format
    /// used by MOLT, so these errors typically indicate data format
    /// incompatibilities or memory allocation failures.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Internal error indicating a bug or unexpected state.
    ///
    /// This error should never occur during normal operation. It indicates a
    /// violated internal invariant or a logic error in MOLT code. If you
    /// encounter it, please report it with reproduction steps.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid-operation error from any displayable error.
    ///
    /// This is a convenience method for converting other error types into
    /// [`Error::InvalidOperation`] while preserving the original message.
    ///
    /// # Examples
    ///
    /// ```
    /// use molt_result::Error;
    ///
    /// let err = Error::invalid_operation("cannot cast List to Int64");
    /// assert!(matches!(err, Error::InvalidOperation(_)));
    /// ```
    #[inline]
    pub fn invalid_operation<E: fmt::Display>(err: E) -> Self {
        Error::InvalidOperation(err.to_string())
    }

    /// Create a column-not-found error for the given column name.
    #[inline]
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Error::ColumnNotFound(name.into())
    }
}
