//! Schema-to-table projection engine.
//!
//! `formgrid` derives a renderable table view-model from a declarative,
//! recursive schema tree describing a form's array field. Live field
//! overrides shadow the schema's static display attributes per attribute;
//! the derivers walk the tree once per render pass and produce the column
//! spec tree, the index-only row model and the row-selection wiring that a
//! generic table widget consumes. The widget itself, the reactive field
//! container and schema parsing all live outside this crate.
//!
//! One render pass:
//!
//! ```
//! use std::sync::Arc;
//!
//! use formgrid::prelude::*;
//! use serde_json::json;
//!
//! struct MarkerRender;
//!
//! impl ScopedRender for MarkerRender {
//!     type Output = String;
//!     fn render_scoped(&self, index: usize, schema: &SchemaNode) -> String {
//!         format!("{}[{index}]", schema.name)
//!     }
//! }
//!
//! let schema = SchemaNode::group("orders").items(
//!     SchemaNode::group("row")
//!         .property(SchemaNode::checkbox("pick").data_index("checked"))
//!         .property(SchemaNode::column("name").title("Name").width(20)),
//! );
//! let data = State::new(vec![json!({"name": "a"}), json!({"name": "b", "checked": true})]);
//!
//! let model = TableModel::project(&schema, "orders", &NoOverrides, &data, &Arc::new(MarkerRender));
//! assert_eq!(model.rows.len(), 2);
//! assert_eq!(model.columns[0].render_cell(1).unwrap(), "name[1]");
//! let selection = model.selection.unwrap();
//! assert_eq!(selection.selected_keys, ["1"]);
//! ```

pub mod columns;
pub mod fields;
pub mod flags;
pub mod render;
pub mod resolve;
pub mod row_selection;
pub mod rows;
pub mod schema;
pub mod state;
pub mod table;

pub mod prelude {
    pub use crate::columns::{ColumnDescriptor, derive_columns};
    pub use crate::fields::{FieldOverride, NoOverrides, OverrideSource, field_path};
    pub use crate::flags::{FlagError, SelectionFlags};
    pub use crate::render::{CellContent, ColumnSpec, ScopedRender, convert_columns};
    pub use crate::resolve::{ResolvedNode, resolve_node};
    pub use crate::row_selection::{
        BulkSelection, RowSelection, RowSelectionDescriptor, SelectionKind, apply_selection,
        derive_selection,
    };
    pub use crate::rows::{ROW_KEY, RowStub, row_stubs};
    pub use crate::schema::{
        ComponentKind, ComponentProps, FixedSide, NodeClass, SchemaItems, SchemaNode,
    };
    pub use crate::state::State;
    pub use crate::table::TableModel;
}
