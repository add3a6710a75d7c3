//! Attribute resolution: live override over schema default.
//!
//! The merge is per attribute. An override that exists but leaves an
//! attribute unset still yields the schema default for that attribute;
//! an entirely absent override yields all schema defaults.

use crate::fields::{OverrideSource, field_path};
use crate::schema::{FixedSide, SchemaNode};

/// Effective display attributes of one schema node at one render instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNode<'a> {
    /// The schema node these attributes belong to.
    pub node: &'a SchemaNode,
    /// Effective visibility; unset on both layers means visible.
    pub visible: bool,
    /// Effective header text.
    pub title: Option<String>,
    /// Effective column width.
    pub width: Option<u16>,
    /// Effective ellipsis flag.
    pub ellipsis: Option<bool>,
    /// Effective pinned side.
    pub fixed: Option<FixedSide>,
    /// Effective selection-flag field name.
    pub data_index: Option<String>,
}

/// Resolve the effective attributes of `node` under the override snapshot.
///
/// Pure: same inputs, same output, no side effects.
pub fn resolve_node<'a>(
    node: &'a SchemaNode,
    address: &str,
    overrides: &impl OverrideSource,
) -> ResolvedNode<'a> {
    let live = overrides.resolve(&field_path(address, &node.name));
    let live_props = live.as_ref().and_then(|o| o.props.as_ref());

    ResolvedNode {
        node,
        visible: live
            .as_ref()
            .and_then(|o| o.visible)
            .or(node.visible)
            .unwrap_or(true),
        title: live
            .as_ref()
            .and_then(|o| o.title.clone())
            .or_else(|| node.title.clone()),
        width: live_props.and_then(|p| p.width).or(node.props.width),
        ellipsis: live_props.and_then(|p| p.ellipsis).or(node.props.ellipsis),
        fixed: live_props.and_then(|p| p.fixed).or(node.props.fixed),
        data_index: live_props
            .and_then(|p| p.data_index.clone())
            .or_else(|| node.props.data_index.clone()),
    }
}
