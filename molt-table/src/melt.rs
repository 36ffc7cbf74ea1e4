//! The deprecated melt argument set.
//!
//! `melt` is the older name of the unpivot operation; its parameter names
//! (`id_vars`, `value_vars`) map field-for-field onto
//! [`UnpivotArgs`](molt_plan::plans::UnpivotArgs). The alias is kept
//! behaviorally identical and will be removed in a future release.

use molt_plan::plans::UnpivotArgs;
use molt_plan::select::ColumnSelection;

/// Arguments for the deprecated `melt` entry points.
///
/// `id_vars` corresponds to `index`, `value_vars` to `on`.
#[derive(Clone, Debug, Default)]
pub struct MeltArgs {
    pub id_vars: Option<ColumnSelection>,
    pub value_vars: Option<ColumnSelection>,
    pub variable_name: Option<String>,
    pub value_name: Option<String>,
}

impl MeltArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_vars(mut self, id_vars: impl Into<ColumnSelection>) -> Self {
        self.id_vars = Some(id_vars.into());
        self
    }

    pub fn with_value_vars(mut self, value_vars: impl Into<ColumnSelection>) -> Self {
        self.value_vars = Some(value_vars.into());
        self
    }

    pub fn with_variable_name(mut self, name: impl Into<String>) -> Self {
        self.variable_name = Some(name.into());
        self
    }

    pub fn with_value_name(mut self, name: impl Into<String>) -> Self {
        self.value_name = Some(name.into());
        self
    }

    /// Translate to the current argument set.
    pub fn into_unpivot_args(self) -> UnpivotArgs {
        let mut args = UnpivotArgs::new();
        args.index = self.id_vars;
        args.on = self.value_vars;
        if let Some(name) = self.variable_name {
            args.variable_name = name;
        }
        if let Some(name) = self.value_name {
            args.value_name = name;
        }
        args
    }
}
