//! Eager, materialized tables.

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::{Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use molt_executor::unpivot_batch;
use molt_plan::plans::UnpivotArgs;

use crate::TableResult;
use crate::deprecation;
use crate::lazy::LazyTable;
use crate::melt::MeltArgs;

/// An immutable, materialized table.
///
/// A thin handle over one Arrow `RecordBatch`. Transformations never mutate;
/// they produce new tables with freshly owned output storage (index columns
/// may share buffers with the input, Arrow arrays being reference-counted).
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Table with zero rows and zero columns.
    pub fn empty() -> Self {
        Self {
            batch: RecordBatch::new_empty(Arc::new(Schema::empty())),
        }
    }

    /// Build a table from named columns. All columns must share one length.
    pub fn try_from_columns<I, S>(columns: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (S, ArrayRef)>,
        S: Into<String>,
    {
        let (fields, arrays): (Vec<Field>, Vec<ArrayRef>) = columns
            .into_iter()
            .map(|(name, array)| {
                let field = Field::new(name, array.data_type().clone(), true);
                (field, array)
            })
            .unzip();
        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?;
        Ok(Self { batch })
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Column by name, if present.
    pub fn column_by_name(&self, name: &str) -> Option<&ArrayRef> {
        self.batch.column_by_name(name)
    }

    /// Eagerly unpivot this table.
    ///
    /// Resolves the selections, unifies the value type, and expands row
    /// blocks synchronously. Either the full result is returned or an error
    /// is, with no side effect on this table.
    pub fn unpivot(&self, args: UnpivotArgs) -> TableResult<Table> {
        unpivot_batch(&self.batch, &args).map(Table::new)
    }

    /// Deprecated spelling of [`Table::unpivot`].
    ///
    /// Behaviorally identical; emits one deprecation notice per call.
    pub fn melt(&self, args: MeltArgs) -> TableResult<Table> {
        deprecation::notice("melt", "unpivot");
        self.unpivot(args.into_unpivot_args())
    }

    /// Defer further operations into a lazy plan.
    pub fn lazy(&self) -> LazyTable {
        LazyTable::scan(self.clone())
    }
}
