use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tag owned by the host application.
///
/// The widget only reads `id` (for drag reordering) and `text` (the label,
/// unless another field is named as the label). Any other fields the host
/// stores travel along untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    #[serde(default)]
    pub id: String,
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tag {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            extra: Map::new(),
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.text
    }

    /// Label read from the extra field `field` when it holds a string,
    /// else `text`
    pub fn label_from(&self, field: Option<&str>) -> &str {
        field
            .and_then(|name| self.extra.get(name))
            .and_then(Value::as_str)
            .unwrap_or(&self.text)
    }
}
