//! Column selection specs.
//!
//! A selection is either an explicit ordered list of names or a predicate over
//! `(name, data type)` pairs evaluated against a schema at resolution time.
//! "Omitted" is represented as `Option::None` at the API surface and triggers
//! the defaulting rules in [`crate::resolve`].

use std::fmt;
use std::sync::Arc;

use arrow::datatypes::{DataType, Schema};
use molt_result::Error;

use crate::PlanResult;

/// Predicate over `(column name, data type)` pairs.
///
/// Matchers are closures, not a type hierarchy; anything that can decide
/// membership from the name and type can be a matcher.
#[derive(Clone)]
pub struct ColumnMatcher {
    predicate: Arc<dyn Fn(&str, &DataType) -> bool + Send + Sync>,
}

impl ColumnMatcher {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str, &DataType) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    pub fn matches(&self, name: &str, dtype: &DataType) -> bool {
        (self.predicate)(name, dtype)
    }
}

impl fmt::Debug for ColumnMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ColumnMatcher(<predicate>)")
    }
}

/// A column selection: explicit names or a matcher.
#[derive(Clone, Debug)]
pub enum ColumnSelection {
    /// Explicit ordered list of column names. Resolution fails with
    /// [`Error::ColumnNotFound`] if any name is absent from the schema.
    Named(Vec<String>),
    /// Predicate selection. Expands to the matching names in schema order;
    /// zero matches is a valid, non-error outcome.
    Matching(ColumnMatcher),
}

impl ColumnSelection {
    /// Select a single column by name.
    pub fn name(name: impl Into<String>) -> Self {
        ColumnSelection::Named(vec![name.into()])
    }

    /// Select columns by explicit name list, in the given order.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnSelection::Named(names.into_iter().map(Into::into).collect())
    }

    /// Select columns whose `(name, type)` satisfies the predicate.
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&str, &DataType) -> bool + Send + Sync + 'static,
    {
        ColumnSelection::Matching(ColumnMatcher::new(predicate))
    }

    /// Select columns whose name matches the regular expression.
    pub fn name_matches(pattern: &str) -> PlanResult<Self> {
        let regex = regex::Regex::new(pattern)
            .map_err(|err| Error::InvalidOperation(format!("invalid column pattern: {err}")))?;
        Ok(Self::matching(move |name, _| regex.is_match(name)))
    }

    /// Select all string-typed columns.
    pub fn string_columns() -> Self {
        Self::matching(|_, dtype| matches!(dtype, DataType::Utf8 | DataType::LargeUtf8))
    }

    /// Select all integer-typed columns.
    pub fn integer_columns() -> Self {
        Self::matching(|_, dtype| {
            matches!(
                dtype,
                DataType::Int8
                    | DataType::Int16
                    | DataType::Int32
                    | DataType::Int64
                    | DataType::UInt8
                    | DataType::UInt16
                    | DataType::UInt32
                    | DataType::UInt64
            )
        })
    }

    /// Expand the selection against a schema into an ordered name list.
    pub fn resolve(&self, schema: &Schema) -> PlanResult<Vec<String>> {
        match self {
            ColumnSelection::Named(names) => {
                for name in names {
                    if schema.column_with_name(name).is_none() {
                        return Err(Error::column_not_found(name));
                    }
                }
                Ok(names.clone())
            }
            ColumnSelection::Matching(matcher) => Ok(schema
                .fields()
                .iter()
                .filter(|field| matcher.matches(field.name(), field.data_type()))
                .map(|field| field.name().clone())
                .collect()),
        }
    }
}

impl From<&str> for ColumnSelection {
    fn from(name: &str) -> Self {
        ColumnSelection::name(name)
    }
}

impl From<String> for ColumnSelection {
    fn from(name: String) -> Self {
        ColumnSelection::name(name)
    }
}

impl From<Vec<&str>> for ColumnSelection {
    fn from(names: Vec<&str>) -> Self {
        ColumnSelection::names(names)
    }
}

impl From<Vec<String>> for ColumnSelection {
    fn from(names: Vec<String>) -> Self {
        ColumnSelection::Named(names)
    }
}

impl<const N: usize> From<[&str; N]> for ColumnSelection {
    fn from(names: [&str; N]) -> Self {
        ColumnSelection::names(names)
    }
}
