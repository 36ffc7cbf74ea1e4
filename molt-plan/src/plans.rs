//! Deferred table plan structures.
//!
//! A [`TablePlan`] is a logical description of a reshape pipeline: an
//! in-memory scan, optional projections, and unpivot nodes. Plans are created
//! by the table frontend and consumed by the executor; constructing a plan
//! never touches row data and never fails.

use std::sync::Arc;

use arrow::datatypes::{Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use crate::PlanResult;
use crate::schema::{column_index, infer_unpivot_schema};
use crate::select::ColumnSelection;

// ============================================================================
// Unpivot arguments
// ============================================================================

/// Arguments for one unpivot (melt) operation.
///
/// `index` selects the columns to preserve; `on` selects the columns to
/// collapse. Either may be omitted, triggering the defaulting rules of
/// [`crate::resolve`]. The tag and value output column names are configurable
/// and default to `"variable"` and `"value"`.
#[derive(Clone, Debug)]
pub struct UnpivotArgs {
    pub index: Option<ColumnSelection>,
    pub on: Option<ColumnSelection>,
    pub variable_name: String,
    pub value_name: String,
}

impl Default for UnpivotArgs {
    fn default() -> Self {
        Self {
            index: None,
            on: None,
            variable_name: "variable".to_string(),
            value_name: "value".to_string(),
        }
    }
}

impl UnpivotArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, index: impl Into<ColumnSelection>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn with_on(mut self, on: impl Into<ColumnSelection>) -> Self {
        self.on = Some(on.into());
        self
    }

    pub fn with_variable_name(mut self, name: impl Into<String>) -> Self {
        self.variable_name = name.into();
        self
    }

    pub fn with_value_name(mut self, name: impl Into<String>) -> Self {
        self.value_name = name.into();
        self
    }
}

// ============================================================================
// Plan nodes
// ============================================================================

/// In-memory table source.
#[derive(Clone, Debug)]
pub struct ScanPlan {
    pub batch: RecordBatch,
}

/// Select a subset of named columns, in the given order.
#[derive(Clone, Debug)]
pub struct ProjectionPlan {
    pub input: Box<TablePlan>,
    pub columns: Vec<String>,
}

/// Deferred unpivot node capturing the caller's selection request.
///
/// The selections may stay unresolved (matchers, omitted specs) until the
/// upstream schema is known; schema inference and execution both resolve them
/// through [`infer_unpivot_schema`], so the two paths cannot diverge.
#[derive(Clone, Debug)]
pub struct UnpivotPlan {
    pub input: Box<TablePlan>,
    pub args: UnpivotArgs,
}

/// Logical plan over an in-memory table.
#[derive(Clone, Debug)]
pub enum TablePlan {
    Scan(ScanPlan),
    Projection(ProjectionPlan),
    Unpivot(UnpivotPlan),
}

impl TablePlan {
    /// Plan scanning an in-memory batch.
    pub fn scan(batch: RecordBatch) -> Self {
        TablePlan::Scan(ScanPlan { batch })
    }

    /// Append a projection to this plan.
    pub fn project<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TablePlan::Projection(ProjectionPlan {
            input: Box::new(self),
            columns: columns.into_iter().map(Into::into).collect(),
        })
    }

    /// Append an unpivot node to this plan.
    pub fn unpivot(self, args: UnpivotArgs) -> Self {
        TablePlan::Unpivot(UnpivotPlan {
            input: Box::new(self),
            args,
        })
    }

    /// Infer this node's output schema without touching row data.
    ///
    /// Idempotent: a pure function of the upstream schema. Fails with the same
    /// error kinds execution would produce for the same cause (missing
    /// columns, un-unifiable value types).
    pub fn schema(&self) -> PlanResult<SchemaRef> {
        match self {
            TablePlan::Scan(scan) => Ok(scan.batch.schema()),
            TablePlan::Projection(projection) => {
                let input = projection.input.schema()?;
                let mut fields = Vec::with_capacity(projection.columns.len());
                for name in &projection.columns {
                    let index = column_index(&input, name)?;
                    fields.push(input.field(index).clone());
                }
                Ok(Arc::new(Schema::new(fields)))
            }
            TablePlan::Unpivot(unpivot) => {
                let input = unpivot.input.schema()?;
                Ok(infer_unpivot_schema(&input, &unpivot.args)?.schema)
            }
        }
    }
}
