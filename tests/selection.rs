use std::collections::HashMap;

use formgrid::fields::{FieldOverride, NoOverrides};
use formgrid::row_selection::{
    BulkSelection, RowSelection, SelectionKind, apply_selection, derive_selection,
};
use formgrid::schema::SchemaNode;
use formgrid::state::State;
use serde_json::{Value, json};

fn schema_with(selection_nodes: Vec<SchemaNode>) -> SchemaNode {
    let mut row = SchemaNode::group("row");
    for node in selection_nodes {
        row = row.property(node);
    }
    SchemaNode::group("orders").items(row.property(SchemaNode::column("name")))
}

fn rows() -> State<Vec<Value>> {
    State::new(vec![
        json!({"name": "a"}),
        json!({"name": "b", "picked": true}),
        json!({"name": "c", "picked": 0}),
        json!({"name": "d", "picked": "yes"}),
    ])
}

#[test]
fn no_selection_node_means_no_selection_config() {
    let schema = schema_with(vec![]);
    let descriptors = derive_selection(&schema, "orders", &NoOverrides);
    assert!(descriptors.is_empty());

    let selection = RowSelection::derive(&descriptors, &rows());
    assert!(selection.is_none());
}

#[test]
fn selected_keys_are_truthy_flag_indices() {
    let schema = schema_with(vec![SchemaNode::checkbox("pick").data_index("picked")]);
    let descriptors = derive_selection(&schema, "orders", &NoOverrides);

    let selection = RowSelection::derive(&descriptors, &rows()).unwrap();
    assert_eq!(selection.kind, SelectionKind::Checkbox);
    assert_eq!(selection.selected_keys, ["1", "3"]);
    assert_eq!(
        selection.bulk,
        [BulkSelection::All, BulkSelection::Invert, BulkSelection::Clear]
    );
}

#[test]
fn radio_selection_offers_no_bulk_affordances() {
    let schema = schema_with(vec![SchemaNode::radio("pick").data_index("picked")]);
    let descriptors = derive_selection(&schema, "orders", &NoOverrides);

    let selection = RowSelection::derive(&descriptors, &rows()).unwrap();
    assert_eq!(selection.kind, SelectionKind::Radio);
    assert!(selection.bulk.is_empty());
}

#[test]
fn commit_overwrites_every_row_flag() {
    let data = rows();
    let schema = schema_with(vec![SchemaNode::checkbox("pick").data_index("picked")]);
    let descriptors = derive_selection(&schema, "orders", &NoOverrides);
    let selection = RowSelection::derive(&descriptors, &data).unwrap();

    selection.commit(&[1, 3]);

    let flags: Vec<_> = data.get().iter().map(|r| r["picked"].clone()).collect();
    assert_eq!(flags, [json!(false), json!(true), json!(false), json!(true)]);

    // Rows previously flagged but now unselected are corrected too.
    selection.commit(&[0]);
    let flags: Vec<_> = data.get().iter().map(|r| r["picked"].clone()).collect();
    assert_eq!(flags, [json!(true), json!(false), json!(false), json!(false)]);
}

#[test]
fn only_first_selection_node_is_honored() {
    let schema = schema_with(vec![
        SchemaNode::checkbox("pick").data_index("picked"),
        SchemaNode::radio("pick").data_index("alt"),
    ]);
    let data = State::new(vec![
        json!({"alt": true}),
        json!({"picked": true, "alt": true}),
    ]);

    let descriptors = derive_selection(&schema, "orders", &NoOverrides);
    assert_eq!(descriptors.len(), 2);

    let selection = RowSelection::derive(&descriptors, &data).unwrap();
    // Initial keys come from the first node's flag field only.
    assert_eq!(selection.kind, SelectionKind::Checkbox);
    assert_eq!(selection.selected_keys, ["1"]);

    // Commit writes the first node's flag field; the inert node's field
    // keeps whatever it held, even though the nodes share a name.
    selection.commit(&[0]);
    let snapshot = data.get();
    assert_eq!(snapshot[0]["picked"], json!(true));
    assert_eq!(snapshot[1]["picked"], json!(false));
    assert_eq!(snapshot[0]["alt"], json!(true));
    assert_eq!(snapshot[1]["alt"], json!(true));
}

#[test]
fn hidden_selection_node_yields_to_the_next_one() {
    let schema = schema_with(vec![
        SchemaNode::checkbox("pick").data_index("picked").hidden(),
        SchemaNode::radio("alt_pick").data_index("alt"),
    ]);

    let descriptors = derive_selection(&schema, "orders", &NoOverrides);
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].kind, SelectionKind::Radio);
    assert_eq!(descriptors[0].data_index.as_deref(), Some("alt"));
}

#[test]
fn hidden_group_hides_its_nested_selection_node() {
    let schema = SchemaNode::group("orders").items(
        SchemaNode::group("row").property(
            SchemaNode::group("wrapper")
                .property(SchemaNode::checkbox("pick").data_index("picked")),
        ),
    );

    let mut overrides = HashMap::new();
    overrides.insert(
        "orders.wrapper".to_string(),
        FieldOverride::new().visible(false),
    );

    assert!(derive_selection(&schema, "orders", &overrides).is_empty());
}

#[test]
fn selection_node_inside_group_is_found() {
    let schema = SchemaNode::group("orders").items(
        SchemaNode::group("row").property(
            SchemaNode::group("wrapper")
                .property(SchemaNode::checkbox("pick").data_index("picked")),
        ),
    );

    let descriptors = derive_selection(&schema, "orders", &NoOverrides);
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].key, "pick");
}

#[test]
fn data_index_honors_override_with_schema_fallback() {
    let schema = schema_with(vec![SchemaNode::checkbox("pick").data_index("picked")]);

    let mut overrides = HashMap::new();
    overrides.insert(
        "orders.pick".to_string(),
        FieldOverride::new().props(formgrid::schema::ComponentProps {
            data_index: Some("chosen".to_string()),
            ..Default::default()
        }),
    );

    let descriptors = derive_selection(&schema, "orders", &overrides);
    assert_eq!(descriptors[0].data_index.as_deref(), Some("chosen"));

    // Override present but silent about data_index: schema value holds.
    let silent: HashMap<_, _> = [("orders.pick".to_string(), FieldOverride::new())].into();
    let descriptors = derive_selection(&schema, "orders", &silent);
    assert_eq!(descriptors[0].data_index.as_deref(), Some("picked"));
}

#[test]
fn missing_data_index_leaves_selection_inert() {
    let schema = schema_with(vec![SchemaNode::checkbox("pick")]);
    let data = rows();
    let before = data.get();

    let descriptors = derive_selection(&schema, "orders", &NoOverrides);
    let selection = RowSelection::derive(&descriptors, &data).unwrap();
    assert!(selection.selected_keys.is_empty());

    selection.commit(&[0, 1]);
    assert_eq!(data.get(), before);
}

#[test]
fn apply_selection_skips_rows_that_cannot_hold_the_flag() {
    let mut rows = vec![json!({"name": "a"}), json!("scalar"), json!({"name": "c"})];
    apply_selection(&mut rows, "picked", &[0, 1, 2]);

    assert_eq!(rows[0]["picked"], json!(true));
    assert_eq!(rows[1], json!("scalar"));
    assert_eq!(rows[2]["picked"], json!(true));
}
