//! Row-selection derivation and the selection write-back controller.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::fields::OverrideSource;
use crate::flags::SelectionFlags;
use crate::resolve::resolve_node;
use crate::schema::{NodeClass, SchemaNode};
use crate::state::State;

/// Kind of row-selection UI a selection column asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    /// Multi-select with bulk affordances.
    Checkbox,
    /// Single-select.
    Radio,
}

/// Bulk-selection affordances offered alongside a checkbox selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkSelection {
    /// Select every row.
    All,
    /// Invert the current selection.
    Invert,
    /// Clear the selection.
    Clear,
}

/// Derived description of one row-selection column.
///
/// Unlike plain columns, `data_index` comes from the resolved component
/// props, never defaults to the node name: it names the boolean flag field
/// on each row record.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSelectionDescriptor<'a> {
    /// Column key, equal to the node name.
    pub key: &'a str,
    /// Selection kind.
    pub kind: SelectionKind,
    /// Flag field name on each row record.
    pub data_index: Option<String>,
    /// The owning schema node.
    pub schema: &'a SchemaNode,
}

/// Derive every row-selection descriptor declared by the schema, in
/// declaration order.
///
/// Traversal and pruning match the column deriver: invisible subtrees are
/// dropped, kind-less grouping nodes and plain-column groups are descended
/// through transparently. The full list is returned; downstream only the
/// first entry is honored, the rest stay inert by policy.
pub fn derive_selection<'a>(
    root: &'a SchemaNode,
    address: &str,
    overrides: &impl OverrideSource,
) -> Vec<RowSelectionDescriptor<'a>> {
    let Some(items) = &root.items else {
        return Vec::new();
    };

    let mut selections = Vec::new();
    for item in items.iter() {
        walk_properties(item, address, overrides, &mut selections);
    }
    selections
}

fn walk_properties<'a>(
    node: &'a SchemaNode,
    address: &str,
    overrides: &impl OverrideSource,
    out: &mut Vec<RowSelectionDescriptor<'a>>,
) {
    for child in &node.properties {
        walk(child, address, overrides, out);
    }
}

fn walk<'a>(
    node: &'a SchemaNode,
    address: &str,
    overrides: &impl OverrideSource,
    out: &mut Vec<RowSelectionDescriptor<'a>>,
) {
    let resolved = resolve_node(node, address, overrides);
    if !resolved.visible {
        return;
    }

    let kind = match node.classify() {
        NodeClass::Checkbox => SelectionKind::Checkbox,
        NodeClass::Radio => SelectionKind::Radio,
        NodeClass::Column | NodeClass::Group => {
            return walk_properties(node, address, overrides, out);
        }
        NodeClass::Inert => return,
    };

    out.push(RowSelectionDescriptor {
        key: &node.name,
        kind,
        data_index: resolved.data_index,
        schema: node,
    });
}

/// Overwrite the selection flag on every row: `true` iff the row's index
/// is in `selected`.
///
/// Full overwrite, not an incremental patch, so stale flags left by prior
/// schema shapes are always corrected. Rows that cannot hold the flag are
/// logged and skipped.
pub fn apply_selection<T: SelectionFlags>(rows: &mut [T], data_index: &str, selected: &[usize]) {
    let on: HashSet<usize> = selected.iter().copied().collect();
    for (i, row) in rows.iter_mut().enumerate() {
        if let Err(err) = row.set_flag(data_index, on.contains(&i)) {
            warn!("row {i}: {err}");
        }
    }
}

/// Row-selection configuration handed to the rendering boundary.
///
/// Built from the first derived [`RowSelectionDescriptor`]; carries the
/// initially selected row keys and the commit callback that writes a
/// selection change back into the underlying array.
#[derive(Clone)]
pub struct RowSelection {
    /// Selection kind.
    pub kind: SelectionKind,
    /// Flag field the active selection column reads and writes.
    pub data_index: Option<String>,
    /// Keys (stringified indices) of rows whose flag field is truthy.
    pub selected_keys: Vec<String>,
    /// Bulk affordances to offer. Empty for radio selections.
    pub bulk: Vec<BulkSelection>,
    commit: Arc<dyn Fn(&[usize]) + Send + Sync>,
}

impl RowSelection {
    /// Build the selection controller from the derived descriptors and the
    /// live array handle. Returns `None` when the schema declares no
    /// selection column, in which case no selection UI is rendered at all.
    pub fn derive<T>(
        descriptors: &[RowSelectionDescriptor<'_>],
        data: &State<Vec<T>>,
    ) -> Option<Self>
    where
        T: SelectionFlags + Send + Sync + 'static,
    {
        let first = descriptors.first()?;
        if descriptors.len() > 1 {
            debug!(
                "{} row-selection columns declared; only `{}` is active",
                descriptors.len(),
                first.key
            );
        }

        let data_index = first.data_index.clone();
        let selected_keys = match &data_index {
            Some(field) => data.read(|rows| {
                rows.iter()
                    .enumerate()
                    .filter(|(_, row)| row.flag(field))
                    .map(|(i, _)| i.to_string())
                    .collect()
            }),
            None => Vec::new(),
        };

        let commit = {
            let data = data.clone();
            let data_index = data_index.clone();
            Arc::new(move |selected: &[usize]| {
                let Some(field) = &data_index else {
                    warn!("active row-selection column has no data_index; selection not committed");
                    return;
                };
                data.update(|rows| apply_selection(rows, field, selected));
            }) as Arc<dyn Fn(&[usize]) + Send + Sync>
        };

        Some(Self {
            kind: first.kind,
            data_index,
            selected_keys,
            bulk: match first.kind {
                SelectionKind::Checkbox => {
                    vec![BulkSelection::All, BulkSelection::Invert, BulkSelection::Clear]
                }
                SelectionKind::Radio => Vec::new(),
            },
            commit,
        })
    }

    /// Commit a selection change: overwrite the flag field across all rows
    /// so exactly the rows at `selected` indices are flagged.
    pub fn commit(&self, selected: &[usize]) {
        (self.commit)(selected)
    }
}

impl fmt::Debug for RowSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSelection")
            .field("kind", &self.kind)
            .field("data_index", &self.data_index)
            .field("selected_keys", &self.selected_keys)
            .field("bulk", &self.bulk)
            .finish_non_exhaustive()
    }
}
