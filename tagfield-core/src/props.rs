use serde::{Deserialize, Serialize};

use crate::filter::Segment;
use crate::keys::Delimiter;
use crate::model::{Suggestion, Tag};
use crate::theme::Palette;

pub const DEFAULT_PLACEHOLDER: &str = "Add new tag";
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 2;
pub const DEFAULT_REMOVE_GLYPH: &str = "×";

/// How a finalized query is matched against the suggestion list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Autocomplete {
    /// Add the query as typed
    #[default]
    Off,
    /// Replace the query with the suggestion when exactly one matches
    SingleMatch,
    /// Replace the query with the first matching suggestion
    AnyMatch,
}

/// Plain-data configuration surface of a tag field
#[derive(Debug, Clone)]
pub struct Props {
    pub tags: Vec<Tag>,
    pub suggestions: Vec<Suggestion>,
    pub placeholder: String,
    pub delimiters: Vec<Delimiter>,
    pub autocomplete: Autocomplete,
    pub min_query_length: usize,
    pub read_only: bool,
    /// Input shares the row flow with the tags instead of sitting below them
    pub inline: bool,
    pub autofocus: bool,
    pub allow_delete_from_empty_input: bool,
    pub remove_glyph: String,
    /// Tag field shown on chips instead of `text`
    pub label_field: Option<String>,
    pub palette: Palette,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            suggestions: Vec::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            delimiters: Delimiter::defaults(),
            autocomplete: Autocomplete::Off,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            read_only: false,
            inline: true,
            autofocus: true,
            allow_delete_from_empty_input: true,
            remove_glyph: DEFAULT_REMOVE_GLYPH.to_string(),
            label_field: None,
            palette: Palette::default(),
        }
    }
}

impl Props {
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

pub type FilterFn = Box<dyn Fn(&str, &[Suggestion]) -> Vec<Suggestion>>;
pub type ShouldRenderFn = Box<dyn Fn(&str) -> bool>;
pub type TagRenderFn = Box<dyn Fn(&Tag) -> String>;
pub type SuggestionRenderFn = Box<dyn Fn(&Suggestion, &str) -> Vec<Segment>>;

/// Function-valued configuration. Every hook is optional and falls back to
/// the built-in behaviour.
#[derive(Default)]
pub struct Hooks {
    /// Replaces the case-insensitive substring filter
    pub filter: Option<FilterFn>,
    /// Decides whether the dropdown shows for a (trimmed) query
    pub should_render_suggestions: Option<ShouldRenderFn>,
    pub tag_renderer: Option<TagRenderFn>,
    /// Receives the suggestion and the trimmed query
    pub suggestion_renderer: Option<SuggestionRenderFn>,
}

impl Hooks {
    pub fn filter(mut self, f: impl Fn(&str, &[Suggestion]) -> Vec<Suggestion> + 'static) -> Self {
        self.filter = Some(Box::new(f));
        self
    }

    pub fn should_render_suggestions(mut self, f: impl Fn(&str) -> bool + 'static) -> Self {
        self.should_render_suggestions = Some(Box::new(f));
        self
    }

    pub fn tag_renderer(mut self, f: impl Fn(&Tag) -> String + 'static) -> Self {
        self.tag_renderer = Some(Box::new(f));
        self
    }

    pub fn suggestion_renderer(
        mut self,
        f: impl Fn(&Suggestion, &str) -> Vec<Segment> + 'static,
    ) -> Self {
        self.suggestion_renderer = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("filter", &self.filter.is_some())
            .field("should_render_suggestions", &self.should_render_suggestions.is_some())
            .field("tag_renderer", &self.tag_renderer.is_some())
            .field("suggestion_renderer", &self.suggestion_renderer.is_some())
            .finish()
    }
}
