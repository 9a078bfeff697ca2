//! Render-ready snapshot of a tag field. Front ends draw this; they never
//! reach into the field's state directly.

use crate::filter::Segment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    pub index: usize,
    pub label: String,
    pub removable: bool,
    pub draggable: bool,
    /// Currently picked up by a drag
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    /// Query, or the placeholder when the query is empty
    pub text: String,
    pub is_placeholder: bool,
    pub focused: bool,
    /// Cursor column in display cells, relative to the input start
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView {
    pub index: usize,
    pub segments: Vec<Segment>,
    pub active: bool,
}

impl SuggestionView {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub chips: Vec<ChipView>,
    /// `None` for read-only fields
    pub input: Option<InputView>,
    pub suggestions: Vec<SuggestionView>,
    pub inline: bool,
    pub remove_glyph: String,
}
