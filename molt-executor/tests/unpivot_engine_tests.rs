use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Int64Array, ListArray, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use molt_executor::{execute_plan, unpivot_batch};
use molt_plan::{ColumnSelection, TablePlan, UnpivotArgs};
use molt_result::Error;

fn wide_batch() -> RecordBatch {
    let schema = Schema::new(vec![
        Field::new("A", DataType::Utf8, true),
        Field::new("B", DataType::Int64, true),
        Field::new("C", DataType::Int64, true),
    ]);
    RecordBatch::try_new(
        Arc::new(schema),
        vec![
            Arc::new(StringArray::from(vec!["a", "b", "c"])) as ArrayRef,
            Arc::new(Int64Array::from(vec![1, 3, 5])),
            Arc::new(Int64Array::from(vec![2, 4, 6])),
        ],
    )
    .unwrap()
}

fn string_column(batch: &RecordBatch, index: usize) -> &StringArray {
    batch
        .column(index)
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap()
}

fn int_column(batch: &RecordBatch, index: usize) -> &Int64Array {
    batch
        .column(index)
        .as_any()
        .downcast_ref::<Int64Array>()
        .unwrap()
}

#[test]
fn blocks_are_emitted_in_block_major_order() {
    molt_test_utils::init_tracing_for_tests();
    let args = UnpivotArgs::new().with_index("A").with_on(["B", "C"]);
    let out = unpivot_batch(&wide_batch(), &args).unwrap();

    assert_eq!(out.num_rows(), 6);
    let index = string_column(&out, 0);
    let variable = string_column(&out, 1);
    let value = int_column(&out, 2);

    let rows: Vec<(&str, &str, i64)> = (0..6)
        .map(|i| (index.value(i), variable.value(i), value.value(i)))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("a", "B", 1),
            ("b", "B", 3),
            ("c", "B", 5),
            ("a", "C", 2),
            ("b", "C", 4),
            ("c", "C", 6),
        ]
    );
}

#[test]
fn index_only_unifies_the_remaining_columns() {
    let args = UnpivotArgs::new().with_index("A");
    let out = unpivot_batch(&wide_batch(), &args).unwrap();
    assert_eq!(out.schema().field(2).data_type(), &DataType::Int64);
    let value = int_column(&out, 2);
    let values: Vec<i64> = (0..6).map(|i| value.value(i)).collect();
    assert_eq!(values, vec![1, 3, 5, 2, 4, 6]);
}

#[test]
fn full_melt_stringifies_heterogeneous_columns() {
    let out = unpivot_batch(&wide_batch(), &UnpivotArgs::new()).unwrap();
    assert_eq!(out.num_rows(), 9);
    assert_eq!(out.num_columns(), 2);
    let variable = string_column(&out, 0);
    let value = string_column(&out, 1);
    assert_eq!(variable.value(0), "A");
    assert_eq!(value.value(0), "a");
    assert_eq!(variable.value(3), "B");
    assert_eq!(value.value(3), "1");
    assert_eq!(variable.value(8), "C");
    assert_eq!(value.value(8), "6");
}

#[test]
fn empty_on_keeps_row_count_and_nulls_the_tag_columns() {
    let schema = Schema::new(vec![Field::new("a", DataType::Int64, true)]);
    let batch = RecordBatch::try_new(
        Arc::new(schema),
        vec![Arc::new(Int64Array::from(vec![1, 2, 3])) as ArrayRef],
    )
    .unwrap();

    let out = unpivot_batch(&batch, &UnpivotArgs::new().with_index("a")).unwrap();
    assert_eq!(out.num_rows(), 3);
    assert_eq!(out.schema().field(1).data_type(), &DataType::Utf8);
    assert_eq!(out.schema().field(2).data_type(), &DataType::Null);
    assert_eq!(out.column(1).null_count(), 3);
    let index = int_column(&out, 0);
    let kept: Vec<i64> = (0..3).map(|i| index.value(i)).collect();
    assert_eq!(kept, vec![1, 2, 3]);
}

#[test]
fn zero_column_batch_unpivots_to_the_empty_reshape() {
    let batch = RecordBatch::new_empty(Arc::new(Schema::empty()));
    let out = unpivot_batch(&batch, &UnpivotArgs::new()).unwrap();
    assert_eq!(out.num_rows(), 0);
    assert_eq!(out.schema().field(0).data_type(), &DataType::Utf8);
    assert_eq!(out.schema().field(1).data_type(), &DataType::Null);
}

#[test]
fn list_mixed_with_scalar_aborts_with_invalid_operation() {
    let list_values = ListArray::from_iter_primitive::<arrow::datatypes::Int64Type, _, _>(vec![
        Some(vec![Some(1), Some(2)]),
        Some(vec![Some(3)]),
    ]);
    let schema = Schema::new(vec![
        Field::new("a", DataType::Utf8, true),
        Field::new("b", list_values.data_type().clone(), true),
    ]);
    let batch = RecordBatch::try_new(
        Arc::new(schema),
        vec![
            Arc::new(StringArray::from(vec!["x", "y"])) as ArrayRef,
            Arc::new(list_values),
        ],
    )
    .unwrap();

    let err = unpivot_batch(&batch, &UnpivotArgs::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation(_)));
}

#[test]
fn custom_tag_column_names_flow_through() {
    let args = UnpivotArgs::new()
        .with_index("A")
        .with_variable_name("year")
        .with_value_name("winner");
    let out = unpivot_batch(&wide_batch(), &args).unwrap();
    assert_eq!(out.schema().field(1).name(), "year");
    assert_eq!(out.schema().field(2).name(), "winner");
}

#[test]
fn matcher_selections_drive_the_engine() {
    let args = UnpivotArgs::new()
        .with_index(ColumnSelection::string_columns())
        .with_on(ColumnSelection::integer_columns());
    let out = unpivot_batch(&wide_batch(), &args).unwrap();
    assert_eq!(out.num_rows(), 6);
    assert_eq!(out.schema().field(0).name(), "A");
}

#[test]
fn executed_plan_matches_direct_expansion() {
    let args = UnpivotArgs::new().with_index("A").with_on(["B", "C"]);
    let eager = unpivot_batch(&wide_batch(), &args).unwrap();
    let plan = TablePlan::scan(wide_batch()).unpivot(args);
    let lazy = execute_plan(&plan).unwrap();
    assert_eq!(eager, lazy);
}

#[test]
fn projection_of_missing_column_fails_resolution() {
    let plan = TablePlan::scan(wide_batch()).project(["A", "missing"]);
    let err = execute_plan(&plan).unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(name) if name == "missing"));
}
