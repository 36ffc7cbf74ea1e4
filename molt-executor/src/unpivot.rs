//! The row expansion engine.
//!
//! Given a materialized batch and unpivot arguments, produces the long-format
//! batch: for each value column in order, a contiguous block of rows carrying
//! the index columns unchanged, a constant variable cell naming the column,
//! and that column's cells cast to the unified value type.
//!
//! Output ordering is part of the contract: all rows for the first value
//! column, then all rows for the second, and so on, each block preserving the
//! original row order. Blocks are independent, so they are expanded in
//! parallel and assembled in order afterwards; no partial output can escape
//! because the output batch is only constructed once every block succeeded.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, StringArray, new_null_array};
use arrow::compute::concat;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use molt_compute::cast_to_unified;
use molt_plan::plans::UnpivotArgs;
use molt_plan::schema::{column_index, infer_unpivot_schema};
use molt_result::Error;
use rayon::prelude::*;

use crate::ExecutorResult;

/// Unpivot a materialized batch.
///
/// This is the single expansion implementation behind both the eager table
/// adapter and lazy plan execution. All-or-nothing: either the full output
/// batch is returned or an error is, with no side effect on the input.
pub fn unpivot_batch(batch: &RecordBatch, args: &UnpivotArgs) -> ExecutorResult<RecordBatch> {
    let input_schema = batch.schema();
    let inferred = infer_unpivot_schema(&input_schema, args)?;
    let rows = batch.num_rows();
    let blocks = inferred.columns.on.len();

    tracing::debug!(
        rows,
        blocks,
        index = inferred.columns.index.len(),
        "expanding unpivot"
    );

    if blocks == 0 {
        return expand_empty(batch, &inferred);
    }

    let unified = inferred
        .unified
        .as_ref()
        .ok_or_else(|| Error::Internal("unpivot with value columns but no unified type".into()))?;

    // Each value column contributes one independent block: a constant
    // variable-name array and the column cast to the unified type.
    let expanded: Vec<(ArrayRef, ArrayRef)> = inferred
        .columns
        .on
        .par_iter()
        .map(|name| -> ExecutorResult<(ArrayRef, ArrayRef)> {
            let column = batch.column(column_index(&input_schema, name)?);
            let values = cast_to_unified(column, unified)?;
            let variable: ArrayRef = Arc::new(StringArray::from(vec![name.as_str(); rows]));
            Ok((variable, values))
        })
        .collect::<ExecutorResult<Vec<_>>>()?;

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(inferred.columns.index.len() + 2);

    // Index columns are replicated logically: the same source array is
    // concatenated once per block.
    for name in &inferred.columns.index {
        let column = batch.column(column_index(&input_schema, name)?);
        let parts: Vec<&dyn Array> = vec![column.as_ref(); blocks];
        columns.push(concat(&parts)?);
    }

    let variable_parts: Vec<&dyn Array> = expanded
        .iter()
        .map(|(variable, _)| variable.as_ref())
        .collect();
    columns.push(concat(&variable_parts)?);

    let value_parts: Vec<&dyn Array> = expanded.iter().map(|(_, values)| values.as_ref()).collect();
    columns.push(concat(&value_parts)?);

    Ok(RecordBatch::try_new(inferred.schema.clone(), columns)?)
}

/// Zero value columns: row count is unchanged and the variable and value
/// columns are filled with their types' null markers.
fn expand_empty(
    batch: &RecordBatch,
    inferred: &molt_plan::UnpivotSchema,
) -> ExecutorResult<RecordBatch> {
    let input_schema = batch.schema();
    let rows = batch.num_rows();

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(inferred.columns.index.len() + 2);
    for name in &inferred.columns.index {
        columns.push(batch.column(column_index(&input_schema, name)?).clone());
    }
    columns.push(new_null_array(&DataType::Utf8, rows));
    columns.push(new_null_array(&DataType::Null, rows));

    Ok(RecordBatch::try_new(inferred.schema.clone(), columns)?)
}
