//! The deprecated melt alias: identical output, exactly one notice per call.
//!
//! Kept in its own test binary so the process-wide notice counter is not
//! perturbed by unrelated tests running concurrently.

use std::sync::{Arc, Mutex};

use arrow::array::{ArrayRef, Int64Array};
use molt_table::{MeltArgs, Table, deprecation};
use molt_plan::UnpivotArgs;

// Serializes the tests that read the process-wide notice counter.
static COUNTER_GUARD: Mutex<()> = Mutex::new(());

fn people() -> Table {
    Table::try_from_columns([
        ("number", Arc::new(Int64Array::from(vec![1, 2, 1, 2, 1])) as ArrayRef),
        ("age", Arc::new(Int64Array::from(vec![40, 30, 21, 33, 45]))),
        ("weight", Arc::new(Int64Array::from(vec![100, 103, 95, 90, 110]))),
        ("wgt", Arc::new(Int64Array::from(vec![40, 30, 21, 33, 45]))),
    ])
    .unwrap()
}

#[test]
fn melt_matches_unpivot_and_notices_once_per_call() {
    molt_test_utils::init_tracing_for_tests();
    let _guard = COUNTER_GUARD.lock().unwrap();
    let table = people();

    let via_unpivot = table
        .unpivot(UnpivotArgs::new().with_index("number").with_on("wgt"))
        .unwrap();

    let before = deprecation::notice_count();
    let via_melt = table
        .melt(MeltArgs::new().with_id_vars("number").with_value_vars("wgt"))
        .unwrap();
    assert_eq!(deprecation::notice_count() - before, 1);
    assert_eq!(via_melt, via_unpivot);

    let before = deprecation::notice_count();
    let via_lazy_melt = table
        .lazy()
        .melt(MeltArgs::new().with_id_vars("number").with_value_vars("wgt"))
        .collect()
        .unwrap();
    assert_eq!(deprecation::notice_count() - before, 1);
    assert_eq!(via_lazy_melt, via_unpivot);
}

#[test]
fn melt_renames_flow_through() {
    let _guard = COUNTER_GUARD.lock().unwrap();
    let table = people();
    let out = table
        .melt(
            MeltArgs::new()
                .with_id_vars("number")
                .with_value_vars(["age", "weight"])
                .with_variable_name("bar")
                .with_value_name("foo"),
        )
        .unwrap();
    assert_eq!(out.schema().field(1).name(), "bar");
    assert_eq!(out.schema().field(2).name(), "foo");
    assert_eq!(out.num_rows(), 10);
}
