//! MOLT: columnar unpivot (melt) over Arrow tables.
//!
//! This crate is the primary entrypoint for the MOLT reshape toolkit. It
//! re-exports the user-facing surface from the underlying `molt-*` crates.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use arrow::array::{ArrayRef, Int64Array, StringArray};
//! use molt::{Table, UnpivotArgs};
//!
//! let table = Table::try_from_columns([
//!     ("A", Arc::new(StringArray::from(vec!["a", "b", "c"])) as ArrayRef),
//!     ("B", Arc::new(Int64Array::from(vec![1, 3, 5])) as ArrayRef),
//!     ("C", Arc::new(Int64Array::from(vec![2, 4, 6])) as ArrayRef),
//! ])
//! .unwrap();
//!
//! let long = table
//!     .unpivot(UnpivotArgs::new().with_index("A").with_on(["B", "C"]))
//!     .unwrap();
//! assert_eq!(long.num_rows(), 6);
//! ```
//!
//! # Architecture
//!
//! MOLT is organized as a layered workspace:
//!
//! - **Tables** (`molt-table`): eager [`Table`] and deferred [`LazyTable`].
//! - **Planning** (`molt-plan`): column selection, logical plans, schema
//!   inference, projection pushdown.
//! - **Execution** (`molt-executor`): the shared row expansion engine.
//! - **Compute** (`molt-compute`): type unification and cast kernels.

pub use molt_compute::{CategoricalOrdering, StringCache, categorical_array, string_cache};
pub use molt_executor::{execute_plan, unpivot_batch};
pub use molt_plan::{CATEGORICAL_ORDERING_METADATA_KEY, ColumnSelection, TablePlan, UnpivotArgs};
pub use molt_result::{Error, Result};
pub use molt_table::{LazyTable, MeltArgs, Table, deprecation};
