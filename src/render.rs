//! Column conversion: descriptor tree to renderable column specs.
//!
//! The engine never renders cell content itself. Each leaf spec carries a
//! content delegate that hands the row index and the owning schema subtree
//! to the host's scoped-rendering primitive, so nested fields under `items`
//! bind to the right array element.

use std::fmt;
use std::sync::Arc;

use crate::columns::ColumnDescriptor;
use crate::schema::{FixedSide, SchemaNode};

/// The host's per-index scoped-rendering primitive.
///
/// Given a row index and a schema subtree, render that subtree with all
/// relative addressing resolved against the array element at that index.
/// Tests implement this as a pure function returning a marker value.
pub trait ScopedRender {
    /// Whatever the host's rendering boundary consumes.
    type Output;

    /// Render `schema`'s properties scoped to array element `index`.
    fn render_scoped(&self, index: usize, schema: &SchemaNode) -> Self::Output;
}

/// Per-cell content delegate: row index in, rendered cell out.
pub type CellContent<R> = Arc<dyn Fn(usize) -> R + Send + Sync>;

/// Renderable column spec, mirroring the descriptor tree.
///
/// Group specs keep their converted children and carry no delegate; leaf
/// specs carry the delegate and no children.
#[derive(Clone)]
pub struct ColumnSpec<R> {
    /// Column key, equal to the schema node name.
    pub key: String,
    /// Data index, equal to the schema node name.
    pub data_index: String,
    /// Header text.
    pub title: Option<String>,
    /// Column width.
    pub width: Option<u16>,
    /// Ellipsis flag.
    pub ellipsis: Option<bool>,
    /// Pinned side.
    pub fixed: Option<FixedSide>,
    /// Child specs for a column group, in declaration order.
    pub children: Vec<ColumnSpec<R>>,
    /// Content delegate. `None` for groups.
    pub content: Option<CellContent<R>>,
}

impl<R> ColumnSpec<R> {
    /// True when this spec heads a column group.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Render the cell at `index`, if this is a leaf spec.
    pub fn render_cell(&self, index: usize) -> Option<R> {
        self.content.as_ref().map(|content| content(index))
    }
}

impl<R> fmt::Debug for ColumnSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("data_index", &self.data_index)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("ellipsis", &self.ellipsis)
            .field("fixed", &self.fixed)
            .field("children", &self.children)
            .field("content", &self.content.as_ref().map(|_| "<delegate>"))
            .finish()
    }
}

/// Convert a descriptor tree into renderable column specs, preserving
/// nesting and declaration order.
pub fn convert_columns<S>(
    descriptors: &[ColumnDescriptor<'_>],
    renderer: &Arc<S>,
) -> Vec<ColumnSpec<S::Output>>
where
    S: ScopedRender + Send + Sync + 'static,
{
    descriptors
        .iter()
        .map(|descriptor| convert(descriptor, renderer))
        .collect()
}

fn convert<S>(descriptor: &ColumnDescriptor<'_>, renderer: &Arc<S>) -> ColumnSpec<S::Output>
where
    S: ScopedRender + Send + Sync + 'static,
{
    let children = convert_columns(&descriptor.children, renderer);

    // Leaves get the delegate; it owns a copy of the schema subtree so the
    // spec outlives the borrowed descriptor tree.
    let content = if children.is_empty() {
        let renderer = Arc::clone(renderer);
        let schema = descriptor.schema.clone();
        Some(Arc::new(move |index: usize| renderer.render_scoped(index, &schema))
            as CellContent<S::Output>)
    } else {
        None
    };

    ColumnSpec {
        key: descriptor.key.to_string(),
        data_index: descriptor.data_index.to_string(),
        title: descriptor.title.clone(),
        width: descriptor.width,
        ellipsis: descriptor.ellipsis,
        fixed: descriptor.fixed,
        children,
        content,
    }
}
