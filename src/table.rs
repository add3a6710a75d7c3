//! The projection entry point: one full render pass.

use std::fmt;
use std::sync::Arc;

use crate::columns::derive_columns;
use crate::fields::OverrideSource;
use crate::flags::SelectionFlags;
use crate::render::{ColumnSpec, ScopedRender, convert_columns};
use crate::row_selection::{RowSelection, derive_selection};
use crate::rows::{ROW_KEY, RowStub, row_stubs};
use crate::schema::SchemaNode;
use crate::state::State;

/// Everything the generic table widget needs for one render pass.
///
/// Recomputed fresh on every call to [`TableModel::project`] and consumed
/// immediately; nothing here survives across passes.
pub struct TableModel<R> {
    /// Renderable column specs, groups included.
    pub columns: Vec<ColumnSpec<R>>,
    /// Index-only row model, one stub per array element.
    pub rows: Vec<RowStub>,
    /// Field of [`TableModel::rows`] entries to use as the row key.
    pub row_key: &'static str,
    /// Selection configuration; `None` when the schema declares no
    /// selection column.
    pub selection: Option<RowSelection>,
}

impl<R> TableModel<R> {
    /// Run one synchronous derivation pass over the schema tree, the
    /// override snapshot and the live array value.
    ///
    /// No caching: every call re-walks the tree. `address` is the array
    /// field's own address; overrides for a node are looked up at
    /// `<address>.<node name>`.
    pub fn project<T, S>(
        schema: &SchemaNode,
        address: &str,
        overrides: &impl OverrideSource,
        data: &State<Vec<T>>,
        renderer: &Arc<S>,
    ) -> Self
    where
        T: SelectionFlags + Send + Sync + 'static,
        S: ScopedRender<Output = R> + Send + Sync + 'static,
    {
        let column_descriptors = derive_columns(schema, address, overrides);
        let selection_descriptors = derive_selection(schema, address, overrides);

        Self {
            columns: convert_columns(&column_descriptors, renderer),
            rows: row_stubs(data.read(|rows| rows.len())),
            row_key: ROW_KEY,
            selection: RowSelection::derive(&selection_descriptors, data),
        }
    }
}

// Manual impl because the column specs hold rendering delegates.
impl<R> fmt::Debug for TableModel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableModel")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("row_key", &self.row_key)
            .field("selection", &self.selection)
            .finish()
    }
}
