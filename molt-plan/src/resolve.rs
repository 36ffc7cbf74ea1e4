//! The column selector resolver.
//!
//! Turns optional index/on selections into the concrete, ordered lists of
//! index-column and value-column names for one unpivot operation.
//!
//! Defaulting rules:
//!
//! - both omitted: index is empty, on is every column in schema order
//! - only index given: on is every column not claimed by index, schema order
//! - only on given: index is every column not claimed by on, schema order
//! - both given: on is resolved first, then any name also claimed by index is
//!   removed (index takes precedence, no duplication)

use arrow::datatypes::Schema;
use rustc_hash::FxHashSet;

use crate::PlanResult;
use crate::select::ColumnSelection;

/// Concrete, ordered column lists for one unpivot operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedUnpivot {
    pub index: Vec<String>,
    pub on: Vec<String>,
}

/// Resolve optional index/on selections against a schema.
///
/// Pure function of the schema and the selections; calling it again with the
/// same inputs produces the same lists.
pub fn resolve_unpivot_columns(
    schema: &Schema,
    index: Option<&ColumnSelection>,
    on: Option<&ColumnSelection>,
) -> PlanResult<ResolvedUnpivot> {
    let index_names = match (index, on) {
        (Some(selection), _) => selection.resolve(schema)?,
        // Both omitted: full-table melt with no preserved columns.
        (None, None) => Vec::new(),
        (None, Some(selection)) => complement(schema, &selection.resolve(schema)?),
    };

    let on_names = match on {
        Some(selection) => {
            let mut names = selection.resolve(schema)?;
            if !index_names.is_empty() {
                let claimed: FxHashSet<&str> =
                    index_names.iter().map(|name| name.as_str()).collect();
                names.retain(|name| !claimed.contains(name.as_str()));
            }
            names
        }
        None => complement(schema, &index_names),
    };

    Ok(ResolvedUnpivot {
        index: index_names,
        on: on_names,
    })
}

/// All schema columns not in `claimed`, in schema order.
fn complement(schema: &Schema, claimed: &[String]) -> Vec<String> {
    let claimed: FxHashSet<&str> = claimed.iter().map(|name| name.as_str()).collect();
    schema
        .fields()
        .iter()
        .filter(|field| !claimed.contains(field.name().as_str()))
        .map(|field| field.name().clone())
        .collect()
}
