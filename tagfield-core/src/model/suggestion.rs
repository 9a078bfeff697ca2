use serde::{Deserialize, Serialize};

use super::Tag;

/// An autocomplete candidate: a bare string or a labelled record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Suggestion {
    Text(String),
    Record(Tag),
}

impl Suggestion {
    pub fn label(&self) -> &str {
        match self {
            Suggestion::Text(text) => text,
            Suggestion::Record(tag) => tag.label(),
        }
    }

    /// Turn an accepted suggestion into a tag, using `id` when the
    /// suggestion does not carry one of its own.
    pub fn into_tag(self, id: impl Into<String>) -> Tag {
        match self {
            Suggestion::Text(text) => Tag::new(id, text),
            Suggestion::Record(mut tag) => {
                if tag.id.is_empty() {
                    tag.id = id.into();
                }
                tag
            }
        }
    }
}

impl From<&str> for Suggestion {
    fn from(text: &str) -> Self {
        Suggestion::Text(text.to_string())
    }
}

impl From<String> for Suggestion {
    fn from(text: String) -> Self {
        Suggestion::Text(text)
    }
}

impl From<Tag> for Suggestion {
    fn from(tag: Tag) -> Self {
        Suggestion::Record(tag)
    }
}
