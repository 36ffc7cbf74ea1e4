//! Error types and result definitions for the MOLT reshape engine.
//!
//! This crate provides the unified error type ([`Error`]) and result type alias
//! ([`Result<T>`]) used throughout all MOLT crates. All operations that could fail
//! return `Result<T>`, where the error variant contains detailed information about
//! what went wrong.
//!
//! # Error Philosophy
//!
//! MOLT uses a single error enum ([`Error`]) rather than crate-specific error types.
//!
//! This approach:
//! - Simplifies error handling across crate boundaries
//! - Allows errors to propagate naturally with the `?` operator
//! - Provides clear error messages for end users
//! - Enables structured error matching for programmatic handling
//!
//! # Error Categories
//!
//! - **Resolution failures** ([`Error::ColumnNotFound`]): A selection named a
//!   column the schema does not contain.
//! - **Operation failures** ([`Error::InvalidOperation`]): No common supertype
//!   for the selected value columns, or a cell cannot be cast to the unified type.
//! - **Data format errors** ([`Error::Arrow`]): Arrow kernel or batch-construction
//!   failures.
//! - **Internal errors** ([`Error::Internal`]): Bugs or unexpected states.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
