//! Row stub materialization.
//!
//! The table's row model carries no data, only position. Every cell is
//! rendered out-of-band by re-addressing into the schema tree with the row
//! index, so the stubs exist purely to give the rendering boundary a stable
//! row identity.

use serde::{Deserialize, Serialize};

/// Field name the rendering boundary uses as the table row key.
pub const ROW_KEY: &str = "_index";

/// Index-only row model entry: serializes as `{"_index": "3"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStub {
    /// Row position as a string, unique per render pass.
    #[serde(rename = "_index")]
    pub index: String,
}

/// Materialize one stub per array element, `"0"` through `"N-1"` in order.
pub fn row_stubs(len: usize) -> Vec<RowStub> {
    (0..len)
        .map(|i| RowStub {
            index: i.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stubs_cover_every_index_in_order() {
        let stubs = row_stubs(4);
        let indices: Vec<_> = stubs.iter().map(|s| s.index.as_str()).collect();
        assert_eq!(indices, ["0", "1", "2", "3"]);
    }

    #[test]
    fn empty_array_yields_no_stubs() {
        assert!(row_stubs(0).is_empty());
    }

    #[test]
    fn stub_serializes_under_the_row_key() {
        let stub = RowStub {
            index: "7".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&stub).unwrap(),
            serde_json::json!({ "_index": "7" })
        );
    }
}
