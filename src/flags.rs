//! Selection-flag access on row records.
//!
//! Row records are arbitrary data; the engine only ever touches the one
//! boolean flag field named by the active selection column. [`SelectionFlags`]
//! is the seam: dynamic JSON rows get a blanket implementation, typed hosts
//! implement it on their own row structs.

use serde_json::Value;

/// Error writing a selection flag into a row record.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FlagError {
    /// The row cannot hold named fields.
    #[error("cannot write selection flag `{field}` into a non-object row")]
    NotAnObject { field: String },
}

impl FlagError {
    /// Creates a new non-object row error.
    pub fn not_an_object(field: impl Into<String>) -> Self {
        Self::NotAnObject {
            field: field.into(),
        }
    }
}

/// Read and write the named selection flag on a row record.
pub trait SelectionFlags {
    /// Truthiness of the named field. A missing field is falsy.
    fn flag(&self, field: &str) -> bool;

    /// Overwrite the named field with `on`.
    fn set_flag(&mut self, field: &str, on: bool) -> Result<(), FlagError>;
}

impl SelectionFlags for Value {
    fn flag(&self, field: &str) -> bool {
        self.as_object()
            .and_then(|map| map.get(field))
            .is_some_and(is_truthy)
    }

    fn set_flag(&mut self, field: &str, on: bool) -> Result<(), FlagError> {
        match self.as_object_mut() {
            Some(map) => {
                map.insert(field.to_string(), Value::Bool(on));
                Ok(())
            }
            None => Err(FlagError::not_an_object(field)),
        }
    }
}

/// Loose truthiness over dynamic values: null, false, zero and the empty
/// string are falsy, everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn truthiness_over_json_values() {
        let row = json!({
            "yes": true, "no": false, "null": null,
            "zero": 0, "one": 1, "empty": "", "text": "x",
            "list": [], "obj": {},
        });
        assert!(row.flag("yes"));
        assert!(!row.flag("no"));
        assert!(!row.flag("null"));
        assert!(!row.flag("zero"));
        assert!(row.flag("one"));
        assert!(!row.flag("empty"));
        assert!(row.flag("text"));
        assert!(row.flag("list"));
        assert!(row.flag("obj"));
        assert!(!row.flag("missing"));
    }

    #[test]
    fn set_flag_overwrites_any_prior_value() {
        let mut row = json!({ "checked": "stale" });
        row.set_flag("checked", false).unwrap();
        assert_eq!(row, json!({ "checked": false }));
        row.set_flag("checked", true).unwrap();
        assert_eq!(row, json!({ "checked": true }));
    }

    #[test]
    fn non_object_rows_reject_the_write() {
        let mut row = json!(42);
        assert!(!row.flag("checked"));
        assert!(row.set_flag("checked", true).is_err());
    }
}
