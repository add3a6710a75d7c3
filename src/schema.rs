//! Declarative schema tree for an array field.
//!
//! A [`SchemaNode`] describes one node of a form's array field: its default
//! display attributes, its component kind, and (for grouping nodes) its
//! ordered child nodes. The root node carries `items`, the template for a
//! single array element, from which the table derivers walk.

use serde::{Deserialize, Serialize};

// =============================================================================
// Component classification
// =============================================================================

/// Recognized leaf component kinds.
///
/// Anything else a schema author attaches to a node is outside this closed
/// set and the node is treated as non-contributing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    /// A plain data column (may carry nested `properties` for grouped headers).
    Column,
    /// A checkbox row-selection column (multi-select).
    CheckboxColumn,
    /// A radio row-selection column (single-select).
    RadioColumn,
}

/// Classification of a node, resolved once per traversal step.
///
/// Keeps the derivers a total match over a finite set instead of ad-hoc
/// inspection at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    /// Promoted to a column descriptor.
    Column,
    /// Promoted to a checkbox row-selection descriptor.
    Checkbox,
    /// Promoted to a radio row-selection descriptor.
    Radio,
    /// No component kind but has children: transparent, only descendants
    /// contribute.
    Group,
    /// No component kind, no children: contributes nothing.
    Inert,
}

/// Which side a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    Left,
    Right,
}

// =============================================================================
// Component props
// =============================================================================

/// Per-node display configuration.
///
/// Every field is independently optional so the live override layer can
/// shadow any single attribute while the rest fall back to the schema
/// default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentProps {
    /// Column width in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    /// Truncate overflowing cell content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ellipsis: Option<bool>,
    /// Pin the column to one side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
    /// Name of the boolean flag field a selection column reads and writes
    /// on each row record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_index: Option<String>,
}

impl ComponentProps {
    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.width.is_none()
            && self.ellipsis.is_none()
            && self.fixed.is_none()
            && self.data_index.is_none()
    }
}

// =============================================================================
// Schema node
// =============================================================================

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Node name, unique among siblings. Doubles as column key and
    /// data index for plain columns.
    pub name: String,
    /// Default header text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Leaf component kind, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentKind>,
    /// Default visibility. `Some(false)` prunes the node and its subtree;
    /// unset means visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Default display configuration.
    #[serde(default, skip_serializing_if = "ComponentProps::is_empty")]
    pub props: ComponentProps,
    /// Ordered child nodes. Declaration order is the vector order and is
    /// preserved by every derivation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<SchemaNode>,
    /// Row template of an array field. Present only on the array root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<SchemaItems>,
}

/// Row template of an array field: a single node or an ordered sequence.
/// Both forms are accepted; iteration order is declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaItems {
    Single(Box<SchemaNode>),
    Many(Vec<SchemaNode>),
}

impl SchemaItems {
    /// Iterate the item schemas in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SchemaNode> {
        match self {
            SchemaItems::Single(node) => std::slice::from_ref(node.as_ref()).iter(),
            SchemaItems::Many(nodes) => nodes.iter(),
        }
    }
}

impl From<SchemaNode> for SchemaItems {
    fn from(node: SchemaNode) -> Self {
        SchemaItems::Single(Box::new(node))
    }
}

impl From<Vec<SchemaNode>> for SchemaItems {
    fn from(nodes: Vec<SchemaNode>) -> Self {
        SchemaItems::Many(nodes)
    }
}

impl SchemaNode {
    fn with_component(name: impl Into<String>, component: Option<ComponentKind>) -> Self {
        Self {
            name: name.into(),
            title: None,
            component,
            visible: None,
            props: ComponentProps::default(),
            properties: Vec::new(),
            items: None,
        }
    }

    /// Create a plain column node.
    pub fn column(name: impl Into<String>) -> Self {
        Self::with_component(name, Some(ComponentKind::Column))
    }

    /// Create a checkbox row-selection node.
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::with_component(name, Some(ComponentKind::CheckboxColumn))
    }

    /// Create a radio row-selection node.
    pub fn radio(name: impl Into<String>) -> Self {
        Self::with_component(name, Some(ComponentKind::RadioColumn))
    }

    /// Create a kind-less node: a transparent grouping node when it is
    /// given children, otherwise inert.
    pub fn group(name: impl Into<String>) -> Self {
        Self::with_component(name, None)
    }

    /// Set the default header text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the default visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Mark the node hidden by default.
    pub fn hidden(mut self) -> Self {
        self.visible = Some(false);
        self
    }

    /// Set the default column width.
    pub fn width(mut self, width: u16) -> Self {
        self.props.width = Some(width);
        self
    }

    /// Truncate overflowing cell content.
    pub fn ellipsis(mut self, ellipsis: bool) -> Self {
        self.props.ellipsis = Some(ellipsis);
        self
    }

    /// Pin the column to one side.
    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.props.fixed = Some(side);
        self
    }

    /// Set the selection-flag field name for a selection node.
    pub fn data_index(mut self, data_index: impl Into<String>) -> Self {
        self.props.data_index = Some(data_index.into());
        self
    }

    /// Append a child node.
    pub fn property(mut self, child: SchemaNode) -> Self {
        self.properties.push(child);
        self
    }

    /// Set the array row template.
    pub fn items(mut self, items: impl Into<SchemaItems>) -> Self {
        self.items = Some(items.into());
        self
    }

    /// Classify this node for traversal.
    pub fn classify(&self) -> NodeClass {
        match self.component {
            Some(ComponentKind::Column) => NodeClass::Column,
            Some(ComponentKind::CheckboxColumn) => NodeClass::Checkbox,
            Some(ComponentKind::RadioColumn) => NodeClass::Radio,
            None if !self.properties.is_empty() => NodeClass::Group,
            None => NodeClass::Inert,
        }
    }
}
