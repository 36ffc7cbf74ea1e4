//! Logical query plan structures for MOLT.
//!
//! This crate defines the deferred plan nodes that represent reshape operations
//! before they are executed, along with the pieces both the eager and lazy
//! paths share:
//!
//! - [`select`]: column selection specs — explicit name lists or predicate
//!   matchers evaluated against a schema.
//! - [`resolve`]: the column selector resolver turning optional index/on
//!   selections into concrete ordered name lists.
//! - [`schema`]: schema helpers and unpivot output-schema inference.
//! - [`plans`]: the [`TablePlan`] algebra (scan, projection, unpivot) and
//!   [`UnpivotArgs`].
//! - [`pushdown`]: the projection-pushdown optimizer pass.
//!
//! Plans are created by the table frontend and consumed by the executor.

pub mod plans;
pub mod pushdown;
pub mod resolve;
pub mod schema;
pub mod select;

pub use plans::{ProjectionPlan, ScanPlan, TablePlan, UnpivotArgs, UnpivotPlan};
pub use pushdown::pushdown_projections;
pub use resolve::{ResolvedUnpivot, resolve_unpivot_columns};
pub use schema::{
    CATEGORICAL_ORDERING_METADATA_KEY, UnpivotSchema, column_index, infer_unpivot_schema,
};
pub use select::{ColumnMatcher, ColumnSelection};

/// Result type for plan operations.
pub type PlanResult<T> = molt_result::Result<T>;
