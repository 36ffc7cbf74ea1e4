//! Execution engine for MOLT reshape plans.
//!
//! This crate provides the execution layer that sits between the query planner
//! (`molt-plan`) and callers holding materialized Arrow data:
//!
//! - [`unpivot`]: the row expansion engine shared by eager and lazy
//!   evaluation.
//! - [`execute`]: the [`TablePlan`](molt_plan::TablePlan) walker.
//!
//! The engine is computation-only; no I/O happens here. Value-column blocks
//! are independent and are expanded on rayon worker threads, then assembled
//! into the block-major order the output contract guarantees.

pub mod execute;
pub mod unpivot;

pub use execute::execute_plan;
pub use unpivot::unpivot_batch;

/// Result type for executor operations.
pub type ExecutorResult<T> = molt_result::Result<T>;
