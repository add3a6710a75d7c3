//! Column derivation: schema tree to column descriptor tree.

use log::debug;

use crate::fields::OverrideSource;
use crate::resolve::resolve_node;
use crate::schema::{FixedSide, NodeClass, SchemaNode};

/// Derived description of one table column or column group.
///
/// `key` and `data_index` are both the node name; the rendering boundary
/// relies on that equality to wire cells back to the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor<'a> {
    /// Column key, equal to the node name.
    pub key: &'a str,
    /// Data index, equal to the node name.
    pub data_index: &'a str,
    /// Resolved header text.
    pub title: Option<String>,
    /// Resolved width.
    pub width: Option<u16>,
    /// Resolved ellipsis flag.
    pub ellipsis: Option<bool>,
    /// Resolved pinned side.
    pub fixed: Option<FixedSide>,
    /// The owning schema node.
    pub schema: &'a SchemaNode,
    /// Child descriptors, in declaration order. Empty for leaf columns.
    pub children: Vec<ColumnDescriptor<'a>>,
}

impl ColumnDescriptor<'_> {
    /// True when this descriptor heads a column group.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Derive the ordered column descriptors for the array field schema `root`.
///
/// Walks the row template in declaration order. Nodes that resolve to
/// invisible are pruned with their whole subtree; kind-less nodes with
/// children are transparent; selection and inert nodes contribute nothing
/// here. A root without `items` yields an empty set.
pub fn derive_columns<'a>(
    root: &'a SchemaNode,
    address: &str,
    overrides: &impl OverrideSource,
) -> Vec<ColumnDescriptor<'a>> {
    let Some(items) = &root.items else {
        return Vec::new();
    };

    let mut columns = Vec::new();
    for item in items.iter() {
        // The item schema is the row template; only its properties surface.
        walk_properties(item, address, overrides, &mut columns);
    }
    columns
}

fn walk_properties<'a>(
    node: &'a SchemaNode,
    address: &str,
    overrides: &impl OverrideSource,
    out: &mut Vec<ColumnDescriptor<'a>>,
) {
    for child in &node.properties {
        walk(child, address, overrides, out);
    }
}

fn walk<'a>(
    node: &'a SchemaNode,
    address: &str,
    overrides: &impl OverrideSource,
    out: &mut Vec<ColumnDescriptor<'a>>,
) {
    let resolved = resolve_node(node, address, overrides);
    if !resolved.visible {
        return;
    }

    match node.classify() {
        NodeClass::Column => {
            let mut children = Vec::new();
            walk_properties(node, address, overrides, &mut children);
            out.push(ColumnDescriptor {
                key: &node.name,
                data_index: &node.name,
                title: resolved.title,
                width: resolved.width,
                ellipsis: resolved.ellipsis,
                fixed: resolved.fixed,
                schema: node,
                children,
            });
        }
        NodeClass::Group => walk_properties(node, address, overrides, out),
        // Selection columns are the row-selection deriver's concern.
        NodeClass::Checkbox | NodeClass::Radio => {}
        NodeClass::Inert => {
            debug!("schema node `{}` has no recognized component; skipped", node.name);
        }
    }
}
