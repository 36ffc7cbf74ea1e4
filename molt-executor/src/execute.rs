//! Plan execution.

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use molt_plan::plans::TablePlan;
use molt_plan::schema::column_index;

use crate::ExecutorResult;
use crate::unpivot::unpivot_batch;

/// Execute a plan to a materialized batch.
///
/// Unresolved unpivot selections are resolved here against the materialized
/// upstream schema; a failure anywhere fails the whole execution with no
/// partial output.
pub fn execute_plan(plan: &TablePlan) -> ExecutorResult<RecordBatch> {
    match plan {
        TablePlan::Scan(scan) => Ok(scan.batch.clone()),
        TablePlan::Projection(projection) => {
            let input = execute_plan(&projection.input)?;
            let input_schema = input.schema();

            let mut fields = Vec::with_capacity(projection.columns.len());
            let mut columns: Vec<ArrayRef> = Vec::with_capacity(projection.columns.len());
            for name in &projection.columns {
                let index = column_index(&input_schema, name)?;
                fields.push(input_schema.field(index).clone());
                columns.push(input.column(index).clone());
            }
            tracing::debug!(columns = fields.len(), "applying projection");
            Ok(RecordBatch::try_new(
                Arc::new(Schema::new(fields)),
                columns,
            )?)
        }
        TablePlan::Unpivot(unpivot) => {
            let input = execute_plan(&unpivot.input)?;
            unpivot_batch(&input, &unpivot.args)
        }
    }
}
