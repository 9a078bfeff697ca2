//! A ready-made host: keeps the tags in memory and logs every callback.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::handler::TagHandler;
use crate::model::{Suggestion, Tag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EventKind {
    Added { label: String },
    Deleted { label: String },
    Rejected { label: String },
    Moved { label: String, from: usize, to: usize },
    Clicked { label: String },
    Blurred { value: String },
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Added { label } => write!(f, "added \"{}\"", label),
            EventKind::Deleted { label } => write!(f, "deleted \"{}\"", label),
            EventKind::Rejected { label } => write!(f, "rejected duplicate \"{}\"", label),
            EventKind::Moved { label, from, to } => {
                write!(f, "moved \"{}\" from {} to {}", label, from + 1, to + 1)
            }
            EventKind::Clicked { label } => write!(f, "clicked \"{}\"", label),
            EventKind::Blurred { value } => write!(f, "left the field with \"{}\"", value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// In-memory tag list implementing [`TagHandler`]
#[derive(Debug, Clone)]
pub struct TagList {
    tags: Vec<Tag>,
    events: Vec<TagEvent>,
    allow_duplicates: bool,
    reorderable: bool,
    last_query: String,
}

impl TagList {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self {
            tags,
            events: Vec::new(),
            allow_duplicates: false,
            reorderable: true,
            last_query: String::new(),
        }
    }

    pub fn allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    pub fn reorderable(mut self, reorderable: bool) -> Self {
        self.reorderable = reorderable;
        self
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn events(&self) -> &[TagEvent] {
        &self.events
    }

    /// Query text as last reported by the field
    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn contains_label(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.tags.iter().any(|t| t.label().to_lowercase() == label)
    }

    fn record(&mut self, kind: EventKind) {
        self.events.push(TagEvent { at: Utc::now(), kind });
    }

    fn label_at(&self, index: usize) -> String {
        self.tags
            .get(index)
            .map(|t| t.label().to_string())
            .unwrap_or_default()
    }
}

impl Default for TagList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TagHandler for TagList {
    fn on_addition(&mut self, tag: Suggestion) {
        let tag = tag.into_tag(Uuid::new_v4().to_string());
        self.record(EventKind::Added {
            label: tag.label().to_string(),
        });
        self.tags.push(tag);
    }

    fn on_delete(&mut self, index: usize) {
        if index < self.tags.len() {
            let tag = self.tags.remove(index);
            self.record(EventKind::Deleted { label: tag.text });
        }
    }

    fn before_addition(&mut self, tag: &Suggestion) -> bool {
        if self.allow_duplicates || !self.contains_label(tag.label()) {
            return true;
        }
        self.record(EventKind::Rejected {
            label: tag.label().to_string(),
        });
        false
    }

    fn reorderable(&self) -> bool {
        self.reorderable
    }

    fn on_drag(&mut self, tag: &Tag, from: usize, to: usize) {
        if from >= self.tags.len() || to >= self.tags.len() {
            return;
        }
        let moved = self.tags.remove(from);
        self.tags.insert(to, moved);
        self.record(EventKind::Moved {
            label: tag.label().to_string(),
            from,
            to,
        });
    }

    fn on_input_change(&mut self, query: &str) {
        self.last_query = query.to_string();
    }

    fn on_input_blur(&mut self, value: &str) {
        self.record(EventKind::Blurred {
            value: value.to_string(),
        });
    }

    fn on_tag_click(&mut self, index: usize) {
        let label = self.label_at(index);
        self.record(EventKind::Clicked { label });
    }
}

/// Serialize tags as pretty JSON
pub fn to_json(tags: &[Tag]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tags)
}

/// A small country list to play with
pub fn sample_suggestions() -> Vec<Suggestion> {
    [
        "Argentina", "Australia", "Austria", "Brazil", "Canada", "Chile", "Denmark", "Finland",
        "France", "Germany", "Ghana", "Iceland", "India", "Indonesia", "Ireland", "Japan",
        "Kenya", "Mexico", "Netherlands", "New Zealand", "Norway", "Portugal", "Spain",
        "Sweden", "Thailand", "Uruguay", "Vietnam",
    ]
    .into_iter()
    .map(Suggestion::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::TagField;
    use crate::keys::Key;
    use crate::props::Props;

    fn list() -> TagList {
        TagList::new(vec![Tag::new("1", "Spain"), Tag::new("2", "Chile"), Tag::new("3", "Peru")])
    }

    fn labels(list: &TagList) -> Vec<&str> {
        list.tags().iter().map(Tag::label).collect()
    }

    #[test]
    fn test_addition_assigns_id() {
        let mut list = TagList::default();
        list.on_addition(Suggestion::from("Kenya"));

        assert_eq!(labels(&list), vec!["Kenya"]);
        assert!(Uuid::parse_str(&list.tags()[0].id).is_ok());
        assert_eq!(
            list.events()[0].kind,
            EventKind::Added {
                label: "Kenya".to_string()
            }
        );
    }

    #[test]
    fn test_duplicates_rejected_case_insensitively() {
        let mut list = list();
        assert!(!list.before_addition(&Suggestion::from("spain")));
        assert!(list.before_addition(&Suggestion::from("Japan")));

        let mut lenient = self::list().allow_duplicates(true);
        assert!(lenient.before_addition(&Suggestion::from("spain")));
    }

    #[test]
    fn test_drag_reinserts() {
        let mut list = list();
        let spain = list.tags()[0].clone();
        list.on_drag(&spain, 0, 2);
        assert_eq!(labels(&list), vec!["Chile", "Peru", "Spain"]);

        let peru = list.tags()[1].clone();
        list.on_drag(&peru, 1, 0);
        assert_eq!(labels(&list), vec!["Peru", "Chile", "Spain"]);
    }

    #[test]
    fn test_delete_records_label() {
        let mut list = list();
        list.on_delete(1);
        list.on_delete(7);

        assert_eq!(labels(&list), vec!["Spain", "Peru"]);
        assert_eq!(list.events().len(), 1);
        assert_eq!(list.events()[0].kind.to_string(), "deleted \"Chile\"");
    }

    #[test]
    fn test_drives_a_field() {
        let mut list = list();
        let mut field = TagField::new(Props::default().with_tags(list.tags().to_vec()));

        for c in "chile".chars() {
            field.handle_key(Key::Char(c).into(), &mut list);
        }
        field.handle_key(Key::Enter.into(), &mut list);
        assert_eq!(list.tags().len(), 3);
        assert_eq!(field.query(), "chile");

        field.handle_change("Japan", &mut list);
        field.handle_key(Key::Enter.into(), &mut list);
        field.set_tags(list.tags().to_vec());

        assert_eq!(labels(&list), vec!["Spain", "Chile", "Peru", "Japan"]);
        assert_eq!(field.tags().len(), 4);
    }

    #[test]
    fn test_events_serialize_flat() {
        let mut list = list();
        list.on_tag_click(0);
        let json = serde_json::to_value(&list.events()[0]).unwrap();

        assert_eq!(json["kind"], "clicked");
        assert_eq!(json["label"], "Spain");
        assert!(json["at"].is_string());
    }
}
