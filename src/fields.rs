//! Live field overrides.
//!
//! The reactive form runtime keeps a mutable counterpart of each schema
//! node, addressed by path. This crate never talks to that runtime
//! directly; it consumes a read-only snapshot through [`OverrideSource`]
//! so every derivation stays a pure function of its inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::schema::ComponentProps;

/// Live counterpart of a schema node.
///
/// Each attribute shadows the schema default only when present; an unset
/// attribute means "no opinion", not "cleared".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOverride {
    /// Visibility override. `Some(false)` prunes the node and its subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Header text override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Display configuration override, merged attribute by attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<ComponentProps>,
}

impl FieldOverride {
    /// Create an empty override (shadows nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Override visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Override the header text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Override the display configuration.
    pub fn props(mut self, props: ComponentProps) -> Self {
        self.props = Some(props);
        self
    }
}

/// Read-only snapshot of the live field state.
///
/// Lookup failure is the expected state for nodes the runtime has never
/// materialized; the derivers fall back to the schema defaults.
pub trait OverrideSource {
    /// Resolve the override at `path`, if one has been materialized.
    fn resolve(&self, path: &str) -> Option<FieldOverride>;
}

/// An override source with no materialized fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideSource for NoOverrides {
    fn resolve(&self, _path: &str) -> Option<FieldOverride> {
        None
    }
}

impl OverrideSource for HashMap<String, FieldOverride> {
    fn resolve(&self, path: &str) -> Option<FieldOverride> {
        self.get(path).cloned()
    }
}

/// Form the lookup path for a node under an array field address.
pub fn field_path(address: &str, name: &str) -> String {
    format!("{address}.{name}")
}
