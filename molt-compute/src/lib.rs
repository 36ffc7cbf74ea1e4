//! Compute kernels for the MOLT reshape engine.
//!
//! This crate provides the type-level machinery the unpivot pipeline needs:
//!
//! - [`unify`]: folds a supertype computation across the selected value
//!   columns' types, including the physical-ordering rule for categorical
//!   (dictionary-encoded) inputs.
//! - [`cast`]: casts value columns into the unified output type.
//! - [`string_cache`]: the optional string-interning service categorical
//!   columns may be built against. The unifier never reads it; it is an
//!   injected collaborator for array construction only.
//! - [`categorical`]: construction helpers for dictionary-encoded columns.

pub mod cast;
pub mod categorical;
pub mod string_cache;
pub mod unify;

pub use cast::cast_to_unified;
pub use categorical::categorical_array;
pub use string_cache::StringCache;
pub use unify::{CategoricalOrdering, UnifiedType, supertype, unify_value_types};

/// Result type for compute operations.
pub type ComputeResult<T> = molt_result::Result<T>;
