//! Dynamic row records

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// A dynamic field value carried by a [`Row`].
///
/// Rows are schemaless: a cell resolves whatever value sits under its
/// column's data key and renders its text form. The untagged representation
/// lets whole rows deserialize straight from JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/absent value; renders as empty text.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The text form painted into a cell.
    pub fn as_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// One table row: a bag of field values keyed by the column data index.
///
/// # Example
///
/// ```
/// use gridcanvas::row::Row;
///
/// let row = Row::new().set("first", "Jack").set("age", 16);
/// assert_eq!(row.field_text("first"), "Jack");
/// assert_eq!(row.field_text("missing"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Text form of a field; missing fields render as empty text.
    pub fn field_text(&self, key: &str) -> String {
        self.fields.get(key).map(Value::as_text).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_json_object() {
        let row: Row =
            serde_json::from_str(r#"{"first":"Jack","age":16,"weight":52.5,"ok":true}"#).unwrap();
        assert_eq!(row.get("first"), Some(&Value::String("Jack".into())));
        assert_eq!(row.get("age"), Some(&Value::Int(16)));
        assert_eq!(row.get("weight"), Some(&Value::Float(52.5)));
        assert_eq!(row.field_text("ok"), "true");
    }

    #[test]
    fn test_null_field_renders_empty() {
        let row: Row = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(row.get("name"), Some(&Value::Null));
        assert_eq!(row.field_text("name"), "");
    }

    #[test]
    fn test_value_text_forms() {
        assert_eq!(Value::from(16).as_text(), "16");
        assert_eq!(Value::from("hi").as_text(), "hi");
        assert_eq!(Value::Null.as_text(), "");
    }
}
