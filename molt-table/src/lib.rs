//! User-facing tables for the MOLT reshape engine.
//!
//! [`Table`] is an immutable, materialized table (one Arrow `RecordBatch`
//! under the hood) with an eager [`Table::unpivot`]. [`LazyTable`] defers the
//! same operations into a [`TablePlan`](molt_plan::TablePlan) that is
//! optimized and executed on [`LazyTable::collect`].
//!
//! Both paths converge on the same resolver, unifier, and expansion engine;
//! the adapters here are thin composition layers.
//!
//! The deprecated `melt` spelling of unpivot is kept behaviorally identical
//! and emits a runtime deprecation notice; see [`deprecation`].

pub mod deprecation;
pub mod lazy;
pub mod melt;
pub mod table;

pub use lazy::LazyTable;
pub use melt::MeltArgs;
pub use table::Table;

/// Result type for table operations.
pub type TableResult<T> = molt_result::Result<T>;
