//! Deferred tables.

use arrow::datatypes::SchemaRef;
use molt_executor::execute_plan;
use molt_plan::plans::{TablePlan, UnpivotArgs};
use molt_plan::pushdown::pushdown_projections;

use crate::TableResult;
use crate::deprecation;
use crate::melt::MeltArgs;
use crate::table::Table;

/// A deferred table: a logical plan that materializes on [`LazyTable::collect`].
///
/// Plan construction never touches row data and never fails; resolution
/// errors and type errors surface at schema inference or collect time.
#[derive(Clone, Debug)]
pub struct LazyTable {
    plan: TablePlan,
}

impl LazyTable {
    /// Start a lazy pipeline from a materialized table.
    pub fn scan(table: Table) -> Self {
        Self {
            plan: TablePlan::scan(table.batch().clone()),
        }
    }

    /// The underlying logical plan.
    pub fn plan(&self) -> &TablePlan {
        &self.plan
    }

    /// Defer an unpivot of this table.
    pub fn unpivot(self, args: UnpivotArgs) -> Self {
        Self {
            plan: self.plan.unpivot(args),
        }
    }

    /// Deprecated spelling of [`LazyTable::unpivot`].
    ///
    /// Behaviorally identical; emits one deprecation notice per call.
    pub fn melt(self, args: MeltArgs) -> Self {
        deprecation::notice("melt", "unpivot");
        self.unpivot(args.into_unpivot_args())
    }

    /// Keep only the named columns, in the given order.
    pub fn select<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plan: self.plan.project(columns),
        }
    }

    /// Infer the output schema without touching row data.
    ///
    /// Pure function of the upstream schema; repeated calls return the same
    /// result.
    pub fn schema(&self) -> TableResult<SchemaRef> {
        self.plan.schema()
    }

    /// Optimize and execute the plan, materializing the result.
    pub fn collect(self) -> TableResult<Table> {
        let plan = pushdown_projections(self.plan)?;
        tracing::debug!(?plan, "collecting lazy table");
        execute_plan(&plan).map(Table::new)
    }
}
