//! Attribute forwarding for question input elements.
//!
//! Every attribute value becomes a string: `null` is empty, objects and arrays
//! use their compact JSON encoding, and scalars use their display form. Double
//! quotes are escaped as `&quot;` so each `key="value"` pair stays well formed.

use serde_json::{Map, Value};

/// The element a question instantiates for its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: String,
    /// Attribute names with their already-escaped string values, in source order
    pub attributes: Vec<(String, String)>,
}

impl ElementNode {
    pub fn from_attributes(tag: &str, attributes: Option<&Map<String, Value>>) -> Self {
        let attributes = attributes
            .map(|map| {
                map.iter()
                    .map(|(key, value)| {
                        (key.clone(), escape_quotes(&serialize_attribute_value(value)))
                    })
                    .collect()
            })
            .unwrap_or_default();
        ElementNode {
            tag: tag.to_string(),
            attributes,
        }
    }

    /// Attribute list as it appears inside the opening tag
    pub fn attribute_string(&self) -> String {
        self.attributes
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_markup(&self) -> String {
        let attrs = self.attribute_string();
        if attrs.is_empty() {
            format!("<{}></{}>", self.tag, self.tag)
        } else {
            format!("<{} {}></{}>", self.tag, attrs, self.tag)
        }
    }
}

/// String form of a single attribute value, before quote escaping
pub fn serialize_attribute_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Serialize a whole attribute map into `key="value"` pairs joined by spaces
pub fn serialize_attributes(attributes: &Map<String, Value>) -> String {
    ElementNode::from_attributes("", Some(attributes)).attribute_string()
}

fn escape_quotes(raw: &str) -> String {
    raw.replace('"', "&quot;")
}
