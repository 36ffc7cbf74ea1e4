//! Projection pushdown.
//!
//! When a projection sits directly above an unpivot node, only a subset of the
//! upstream columns is actually needed:
//!
//! - every resolved value column is always required upstream, because each one
//!   contributes a full row block (they determine both block count and the
//!   unified value type);
//! - index columns may be narrowed to the subset the projection keeps.
//!
//! Narrowing is only safe once the unpivot's selections are pinned to concrete
//! name lists resolved against the *full* upstream schema. Otherwise a
//! narrowed upstream would change how an omitted or matcher-based `on` spec
//! resolves, silently unpivoting fewer columns than the non-pushed-down plan.
//! The pass therefore rewrites the node's selections to `Named` lists first,
//! then inserts a projection beneath it. Rewriting an already-pinned node
//! again yields the same lists, so the pass is idempotent.

use rustc_hash::FxHashSet;

use crate::PlanResult;
use crate::plans::{ProjectionPlan, TablePlan, UnpivotPlan};
use crate::resolve::resolve_unpivot_columns;
use crate::select::ColumnSelection;

/// Push projections below unpivot nodes where possible.
pub fn pushdown_projections(plan: TablePlan) -> PlanResult<TablePlan> {
    match plan {
        TablePlan::Scan(scan) => Ok(TablePlan::Scan(scan)),
        TablePlan::Unpivot(unpivot) => Ok(TablePlan::Unpivot(UnpivotPlan {
            input: Box::new(pushdown_projections(*unpivot.input)?),
            args: unpivot.args,
        })),
        TablePlan::Projection(projection) => match *projection.input {
            TablePlan::Unpivot(unpivot) => {
                push_through_unpivot(unpivot, projection.columns)
            }
            other => Ok(TablePlan::Projection(ProjectionPlan {
                input: Box::new(pushdown_projections(other)?),
                columns: projection.columns,
            })),
        },
    }
}

fn push_through_unpivot(unpivot: UnpivotPlan, needed: Vec<String>) -> PlanResult<TablePlan> {
    let input = pushdown_projections(*unpivot.input)?;
    let upstream = input.schema()?;

    // Pin the selections against the full upstream schema before narrowing.
    let resolved = resolve_unpivot_columns(
        &upstream,
        unpivot.args.index.as_ref(),
        unpivot.args.on.as_ref(),
    )?;

    let kept: FxHashSet<&str> = needed.iter().map(|name| name.as_str()).collect();
    let narrowed_index: Vec<String> = resolved
        .index
        .iter()
        .filter(|name| kept.contains(name.as_str()))
        .cloned()
        .collect();

    let mut required = narrowed_index.clone();
    required.extend(resolved.on.iter().cloned());

    let mut args = unpivot.args;
    args.index = Some(ColumnSelection::Named(narrowed_index));
    args.on = Some(ColumnSelection::Named(resolved.on));

    // An empty requirement set would drop the upstream row count along with
    // the columns; leave the input untouched in that case.
    let pruned_input = if required.is_empty() {
        input
    } else {
        TablePlan::Projection(ProjectionPlan {
            input: Box::new(input),
            columns: required,
        })
    };

    Ok(TablePlan::Projection(ProjectionPlan {
        input: Box::new(TablePlan::Unpivot(UnpivotPlan {
            input: Box::new(pruned_input),
            args,
        })),
        columns: needed,
    }))
}
