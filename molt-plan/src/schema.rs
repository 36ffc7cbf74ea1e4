//! Schema helpers and unpivot output-schema inference.

use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use molt_compute::unify::{UnifiedType, unify_value_types};
use molt_result::Error;

use crate::PlanResult;
use crate::plans::UnpivotArgs;
use crate::resolve::{ResolvedUnpivot, resolve_unpivot_columns};

/// Field metadata key under which the value column's categorical ordering is
/// published when two or more categorical columns were unified.
pub const CATEGORICAL_ORDERING_METADATA_KEY: &str = "molt:categorical_ordering";

/// Position of `name` in `schema`, or [`Error::ColumnNotFound`].
///
/// Every name lookup that a caller's selection can cause goes through this
/// helper so schema inference and execution surface the identical error kind
/// for the same missing column.
pub fn column_index(schema: &Schema, name: &str) -> PlanResult<usize> {
    schema
        .column_with_name(name)
        .map(|(index, _)| index)
        .ok_or_else(|| Error::column_not_found(name))
}

/// Inferred output shape of one unpivot operation.
#[derive(Clone, Debug)]
pub struct UnpivotSchema {
    /// Output schema: index fields, then the variable and value columns.
    pub schema: SchemaRef,
    /// The concrete column lists the schema was derived from.
    pub columns: ResolvedUnpivot,
    /// Unified value type; `None` when zero value columns resolved, in which
    /// case the value column is typed null.
    pub unified: Option<UnifiedType>,
}

/// Resolve selections against `input` and infer the unpivot output schema.
///
/// Pure function of the input schema and the arguments, shared by lazy schema
/// inference and by both execution paths so they can never diverge. Output
/// schema is `index fields ++ [variable: Utf8] ++ [value: unified]`; with zero
/// value columns the value column is typed null (the canonical empty-reshape
/// schema).
pub fn infer_unpivot_schema(input: &Schema, args: &UnpivotArgs) -> PlanResult<UnpivotSchema> {
    let columns = resolve_unpivot_columns(input, args.index.as_ref(), args.on.as_ref())?;

    let mut value_types = Vec::with_capacity(columns.on.len());
    for name in &columns.on {
        let index = column_index(input, name)?;
        value_types.push(input.field(index).data_type());
    }
    let unified = if columns.on.is_empty() {
        None
    } else {
        Some(unify_value_types(value_types)?)
    };

    let mut fields = Vec::with_capacity(columns.index.len() + 2);
    for name in &columns.index {
        let index = column_index(input, name)?;
        fields.push(input.field(index).clone());
    }
    fields.push(Field::new(&args.variable_name, DataType::Utf8, true));

    let value_type = unified
        .as_ref()
        .map(|u| u.data_type.clone())
        .unwrap_or(DataType::Null);
    let mut value_field = Field::new(&args.value_name, value_type, true);
    if let Some(ordering) = unified.as_ref().and_then(|u| u.categorical_ordering) {
        value_field = value_field.with_metadata(HashMap::from([(
            CATEGORICAL_ORDERING_METADATA_KEY.to_string(),
            ordering.as_str().to_string(),
        )]));
    }
    fields.push(value_field);

    Ok(UnpivotSchema {
        schema: Arc::new(Schema::new(fields)),
        columns,
        unified,
    })
}
