use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use molt_plan::{ColumnSelection, ProjectionPlan, TablePlan, UnpivotArgs, pushdown_projections};

fn batch() -> RecordBatch {
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

fn unpivot_node(plan: &TablePlan) -> &molt_plan::UnpivotPlan {
    match plan {
        TablePlan::Projection(ProjectionPlan { input, .. }) => match input.as_ref() {
            TablePlan::Unpivot(unpivot) => unpivot,
            other => panic!("expected unpivot below projection, got {other:?}"),
        },
        other => panic!("expected projection on top, got {other:?}"),
    }
}

#[test]
fn pushdown_preserves_the_output_schema() {
    let plan = TablePlan::scan(batch())
        .unpivot(UnpivotArgs::new().with_index("A"))
        .project(["A", "value"]);
    let expected = plan.schema().unwrap();
    let pushed = pushdown_projections(plan).unwrap();
    assert_eq!(pushed.schema().unwrap(), expected);
}

#[test]
fn default_on_spec_is_pinned_before_narrowing() {
    // `on` is omitted: it must resolve against the full upstream schema even
    // though the downstream projection only keeps one index column.
    let plan = TablePlan::scan(batch())
        .unpivot(UnpivotArgs::new().with_index("A"))
        .project(["A", "value"]);
    let pushed = pushdown_projections(plan).unwrap();
    let unpivot = unpivot_node(&pushed);
    match unpivot.args.on.as_ref() {
        Some(ColumnSelection::Named(names)) => assert_eq!(names, &["B", "C"]),
        other => panic!("expected pinned on-selection, got {other:?}"),
    }
}

#[test]
fn value_columns_are_always_required_upstream() {
    let plan = TablePlan::scan(batch())
        .unpivot(UnpivotArgs::new().with_index("A").with_on(["B", "C"]))
        .project(["A"]);
    let pushed = pushdown_projections(plan).unwrap();
    let unpivot = unpivot_node(&pushed);
    let upstream = unpivot.input.schema().unwrap();
    let names: Vec<&str> = upstream.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn unneeded_index_columns_are_pruned_upstream() {
    let plan = TablePlan::scan(batch())
        .unpivot(UnpivotArgs::new().with_index(["A", "B"]).with_on(["C"]))
        .project(["B", "value"]);
    let pushed = pushdown_projections(plan).unwrap();
    let unpivot = unpivot_node(&pushed);
    let upstream = unpivot.input.schema().unwrap();
    let names: Vec<&str> = upstream.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, vec!["B", "C"]);
}

#[test]
fn pushdown_is_idempotent() {
    let plan = TablePlan::scan(batch())
        .unpivot(UnpivotArgs::new().with_index("A"))
        .project(["A", "value"]);
    let once = pushdown_projections(plan).unwrap();
    let schema_once = once.schema().unwrap();
    let twice = pushdown_projections(once).unwrap();
    assert_eq!(twice.schema().unwrap(), schema_once);
}
