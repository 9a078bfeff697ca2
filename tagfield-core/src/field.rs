use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

use crate::error::{Result, TagFieldError};
use crate::filter::{filter_suggestions, highlight, Segment};
use crate::handler::TagHandler;
use crate::keys::{Delimiter, Key, KeyPress};
use crate::model::{Suggestion, Tag};
use crate::props::{Autocomplete, Hooks, Props};
use crate::view::{ChipView, FieldView, InputView, SuggestionView};

/// Whether a key was consumed by the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    /// Not for us; the host may use it (e.g. Tab moving focus)
    Ignored,
}

/// Interaction state of a tag-input field.
///
/// Holds the query, the filtered suggestions and the dropdown selection.
/// Tags themselves are owned by the host and reach the field through
/// [`set_tags`](Self::set_tags); changes are requested through a
/// [`TagHandler`].
pub struct TagField {
    props: Props,
    hooks: Hooks,
    query: String,
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
    selection_mode: bool,
    focused: bool,
    drag_source: Option<usize>,
}

impl TagField {
    pub fn new(props: Props) -> Self {
        Self::with_hooks(props, Hooks::default())
    }

    pub fn with_hooks(props: Props, hooks: Hooks) -> Self {
        let focused = props.autofocus && !props.read_only;
        let suggestions = props.suggestions.clone();
        Self {
            props,
            hooks,
            query: String::new(),
            suggestions,
            selected: None,
            selection_mode: false,
            focused,
            drag_source: None,
        }
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn tags(&self) -> &[Tag] {
        &self.props.tags
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Suggestions matching the current query
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_read_only(&self) -> bool {
        self.props.read_only
    }

    pub fn dragging(&self) -> Option<usize> {
        self.drag_source
    }

    /// Replace the tag list after the host applied a change
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.props.tags = tags;
        if self.drag_source.is_some_and(|i| i >= self.props.tags.len()) {
            self.drag_source = None;
        }
    }

    /// Replace the full suggestion list; the current query is re-applied
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.props.suggestions = suggestions;
        self.suggestions = self.filtered(&self.query);
        self.clamp_selection();
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.props.read_only = read_only;
        if read_only {
            self.focused = false;
            self.drag_source = None;
        }
    }

    pub fn focus(&mut self) {
        if !self.props.read_only {
            self.focused = true;
        }
    }

    pub fn blur<H: TagHandler>(&mut self, handler: &mut H) {
        self.focused = false;
        self.drag_source = None;
        handler.on_input_blur(self.query.trim());
    }

    /// New input text. Runs of spaces collapse to one and a leading space
    /// is dropped before the host sees the value.
    pub fn handle_change<H: TagHandler>(&mut self, value: &str, handler: &mut H) {
        let query = normalize_query(value);
        handler.on_input_change(&query);

        self.suggestions = self.filtered(&query);
        self.query = query;
        self.clamp_selection();
    }

    pub fn handle_key<H: TagHandler>(&mut self, press: KeyPress, handler: &mut H) -> KeyOutcome {
        if self.props.read_only {
            return KeyOutcome::Ignored;
        }
        self.focused = true;

        if press.key == Key::Esc {
            self.dismiss_suggestions();
            return KeyOutcome::Handled;
        }

        if !press.shift && self.is_delimiter(&press) {
            let query = self.query.trim();
            if query.is_empty() {
                // An empty Tab is left alone so focus can move on
                return if press.key == Key::Tab {
                    KeyOutcome::Ignored
                } else {
                    KeyOutcome::Handled
                };
            }

            let tag = self
                .highlighted()
                .cloned()
                .unwrap_or_else(|| Suggestion::Text(query.to_string()));
            self.add_tag(tag, handler);
            return KeyOutcome::Handled;
        }

        match press.key {
            Key::Backspace => {
                if self.query.is_empty() {
                    let count = self.props.tags.len();
                    if self.props.allow_delete_from_empty_input && count > 0 {
                        self.delete_tag(count - 1, handler);
                    }
                } else {
                    let mut value = self.query.clone();
                    value.pop();
                    self.handle_change(&value, handler);
                }
                KeyOutcome::Handled
            }
            Key::Up => {
                self.select_previous();
                KeyOutcome::Handled
            }
            Key::Down => {
                self.select_next();
                KeyOutcome::Handled
            }
            Key::Char(c) => {
                let mut value = self.query.clone();
                value.push(c);
                self.handle_change(&value, handler);
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Split pasted text on the delimiter characters and request one tag
    /// per non-empty segment. Returns how many were accepted.
    pub fn handle_paste<H: TagHandler>(&mut self, text: &str, handler: &mut H) -> usize {
        if self.props.read_only {
            return 0;
        }

        let delimiters: Vec<char> = self.props.delimiters.iter().map(Delimiter::as_char).collect();
        let mut added = 0;
        for segment in text.split(|c: char| delimiters.contains(&c)) {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            if self.commit(Suggestion::Text(segment.to_string()), handler) {
                added += 1;
            }
        }

        self.reset();
        added
    }

    /// Request a new tag. Autocomplete may swap it for a suggestion; the
    /// host's guard may veto it, in which case the query is kept.
    pub fn add_tag<H: TagHandler>(&mut self, tag: Suggestion, handler: &mut H) -> bool {
        let tag = self.autocompleted(tag);
        if !self.commit(tag, handler) {
            return false;
        }
        self.reset();
        true
    }

    pub fn delete_tag<H: TagHandler>(&mut self, index: usize, handler: &mut H) -> bool {
        if self.props.read_only || index >= self.props.tags.len() {
            return false;
        }
        if !handler.before_delete(index) {
            info!(index, "tag deletion vetoed");
            return false;
        }

        debug!(index, "deleting tag");
        handler.on_delete(index);
        self.reset();
        true
    }

    pub fn click_suggestion<H: TagHandler>(&mut self, index: usize, handler: &mut H) -> bool {
        if self.props.read_only {
            return false;
        }
        match self.suggestions.get(index).cloned() {
            Some(suggestion) => self.add_tag(suggestion, handler),
            None => false,
        }
    }

    pub fn hover_suggestion(&mut self, index: usize) {
        if index < self.suggestions.len() {
            self.selected = Some(index);
            self.selection_mode = true;
        }
    }

    pub fn click_tag<H: TagHandler>(&mut self, index: usize, handler: &mut H) {
        if index < self.props.tags.len() {
            handler.on_tag_click(index);
        }
    }

    /// Ask the host to move the tag `id` to the position of `after_id`
    pub fn move_tag<H: TagHandler>(&mut self, id: &str, after_id: &str, handler: &mut H) -> Result<()> {
        if self.props.read_only || !handler.reorderable() {
            return Err(TagFieldError::NotReorderable);
        }

        let from = self.position_of(id)?;
        let to = self.position_of(after_id)?;
        let tag = self.props.tags[from].clone();

        debug!(id, from, to, "moving tag");
        handler.on_drag(&tag, from, to);
        Ok(())
    }

    /// Pick up the tag at `index`. Returns false if it cannot be dragged.
    pub fn begin_drag<H: TagHandler>(&mut self, index: usize, handler: &H) -> bool {
        if self.props.read_only || !handler.reorderable() || index >= self.props.tags.len() {
            return false;
        }
        self.drag_source = Some(index);
        true
    }

    /// Drop the dragged tag onto the tag at `index`. Returns whether a move
    /// was requested.
    pub fn drop_on<H: TagHandler>(&mut self, index: usize, handler: &mut H) -> Result<bool> {
        let Some(from) = self.drag_source.take() else {
            return Ok(false);
        };
        if from == index || index >= self.props.tags.len() {
            return Ok(false);
        }

        let id = self.props.tags[from].id.clone();
        let after_id = self.props.tags[index].id.clone();
        self.move_tag(&id, &after_id, handler)?;
        Ok(true)
    }

    pub fn cancel_drag(&mut self) {
        self.drag_source = None;
    }

    /// Suggestions to show in the dropdown, if it should be open
    pub fn visible_suggestions(&self) -> Option<&[Suggestion]> {
        if self.props.read_only || self.suggestions.is_empty() {
            return None;
        }

        let query = self.query.trim();
        let show = match &self.hooks.should_render_suggestions {
            Some(should_render) => should_render(query),
            None => query.chars().count() >= self.props.min_query_length,
        };
        show.then_some(self.suggestions.as_slice())
    }

    pub fn view<H: TagHandler>(&self, handler: &H) -> FieldView {
        let read_only = self.props.read_only;
        let draggable = handler.reorderable() && !read_only;

        let chips = self
            .props
            .tags
            .iter()
            .enumerate()
            .map(|(index, tag)| ChipView {
                index,
                label: self.render_tag(tag),
                removable: !read_only,
                draggable,
                dragging: self.drag_source == Some(index),
            })
            .collect();

        let input = (!read_only).then(|| {
            let is_placeholder = self.query.is_empty();
            InputView {
                text: if is_placeholder {
                    self.props.placeholder.clone()
                } else {
                    self.query.clone()
                },
                is_placeholder,
                focused: self.focused,
                cursor: if is_placeholder { 0 } else { self.query.width() },
            }
        });

        let query = self.query.trim();
        let suggestions = self
            .visible_suggestions()
            .map(|list| {
                list.iter()
                    .enumerate()
                    .map(|(index, suggestion)| SuggestionView {
                        index,
                        segments: self.render_suggestion(suggestion, query),
                        active: self.selected == Some(index),
                    })
                    .collect()
            })
            .unwrap_or_default();

        FieldView {
            chips,
            input,
            suggestions,
            inline: self.props.inline,
            remove_glyph: self.props.remove_glyph.clone(),
        }
    }

    fn is_delimiter(&self, press: &KeyPress) -> bool {
        self.props.delimiters.iter().any(|d| d.matches(press))
    }

    fn highlighted(&self) -> Option<&Suggestion> {
        if !self.selection_mode {
            return None;
        }
        self.selected.and_then(|i| self.suggestions.get(i))
    }

    fn filtered(&self, query: &str) -> Vec<Suggestion> {
        match &self.hooks.filter {
            Some(filter) => filter(query, &self.props.suggestions),
            None => filter_suggestions(query, &self.props.suggestions),
        }
    }

    fn autocompleted(&self, tag: Suggestion) -> Suggestion {
        if self.props.autocomplete == Autocomplete::Off {
            return tag;
        }

        let matches = self.filtered(tag.label());
        match (self.props.autocomplete, matches.len()) {
            (Autocomplete::SingleMatch, 1) | (Autocomplete::AnyMatch, 1..) => {
                matches.into_iter().next().unwrap_or(tag)
            }
            _ => tag,
        }
    }

    fn commit<H: TagHandler>(&mut self, tag: Suggestion, handler: &mut H) -> bool {
        if !handler.before_addition(&tag) {
            info!(label = tag.label(), "tag addition vetoed");
            return false;
        }
        debug!(label = tag.label(), "adding tag");
        handler.on_addition(tag);
        true
    }

    fn reset(&mut self) {
        self.query.clear();
        self.selected = None;
        self.selection_mode = false;
        self.suggestions = self.filtered("");
    }

    fn dismiss_suggestions(&mut self) {
        self.suggestions.clear();
        self.selected = None;
        self.selection_mode = false;
    }

    fn select_previous(&mut self) {
        let count = self.suggestions.len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None | Some(0) => count - 1,
            Some(i) => i - 1,
        });
        self.selection_mode = true;
    }

    fn select_next(&mut self) {
        let count = self.suggestions.len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % count,
        });
        self.selection_mode = true;
    }

    fn clamp_selection(&mut self) {
        if let Some(i) = self.selected {
            if i >= self.suggestions.len() {
                self.selected = self.suggestions.len().checked_sub(1);
            }
        }
    }

    fn position_of(&self, id: &str) -> Result<usize> {
        self.props
            .tags
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TagFieldError::UnknownTag(id.to_string()))
    }

    fn render_tag(&self, tag: &Tag) -> String {
        match &self.hooks.tag_renderer {
            Some(render) => render(tag),
            None => tag.label_from(self.props.label_field.as_deref()).to_string(),
        }
    }

    fn render_suggestion(&self, suggestion: &Suggestion, query: &str) -> Vec<Segment> {
        match &self.hooks.suggestion_renderer {
            Some(render) => render(suggestion, query),
            None => highlight(suggestion.label(), query),
        }
    }
}

fn normalize_query(value: &str) -> String {
    let mut query = String::with_capacity(value.len());
    let mut previous_space = false;
    for c in value.chars() {
        if c == ' ' && previous_space {
            continue;
        }
        previous_space = c == ' ';
        query.push(c);
    }
    if query.starts_with(' ') {
        query.remove(0);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        added: Vec<Suggestion>,
        deleted: Vec<usize>,
        dragged: Vec<(String, usize, usize)>,
        changes: Vec<String>,
        blurred: Vec<String>,
        clicked: Vec<usize>,
        veto_add: bool,
        veto_delete: bool,
        reorder: bool,
    }

    impl TagHandler for Recorder {
        fn on_addition(&mut self, tag: Suggestion) {
            self.added.push(tag);
        }

        fn on_delete(&mut self, index: usize) {
            self.deleted.push(index);
        }

        fn before_addition(&mut self, _tag: &Suggestion) -> bool {
            !self.veto_add
        }

        fn before_delete(&mut self, _index: usize) -> bool {
            !self.veto_delete
        }

        fn reorderable(&self) -> bool {
            self.reorder
        }

        fn on_drag(&mut self, tag: &Tag, from: usize, to: usize) {
            self.dragged.push((tag.id.clone(), from, to));
        }

        fn on_input_change(&mut self, query: &str) {
            self.changes.push(query.to_string());
        }

        fn on_input_blur(&mut self, value: &str) {
            self.blurred.push(value.to_string());
        }

        fn on_tag_click(&mut self, index: usize) {
            self.clicked.push(index);
        }
    }

    fn countries() -> Vec<Suggestion> {
        ["Thailand", "India", "Indonesia", "Finland"]
            .into_iter()
            .map(Suggestion::from)
            .collect()
    }

    fn tags() -> Vec<Tag> {
        vec![Tag::new("a", "apple"), Tag::new("b", "banana"), Tag::new("c", "cherry")]
    }

    fn field() -> TagField {
        TagField::new(Props::default().with_tags(tags()).with_suggestions(countries()))
    }

    fn type_text(field: &mut TagField, text: &str, handler: &mut Recorder) {
        for c in text.chars() {
            field.handle_key(Key::Char(c).into(), handler);
        }
    }

    fn labels(list: &[Suggestion]) -> Vec<&str> {
        list.iter().map(|s| s.label()).collect()
    }

    #[test]
    fn test_delimiter_adds_trimmed_query_once() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "rust ", &mut handler);
        let outcome = field.handle_key(Key::Enter.into(), &mut handler);

        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(handler.added, vec![Suggestion::from("rust")]);
        assert_eq!(field.query(), "");
    }

    #[test]
    fn test_delimiter_on_empty_query() {
        let mut field = field();
        let mut handler = Recorder::default();

        assert_eq!(field.handle_key(Key::Tab.into(), &mut handler), KeyOutcome::Ignored);
        assert_eq!(field.handle_key(Key::Enter.into(), &mut handler), KeyOutcome::Handled);
        assert!(handler.added.is_empty());
    }

    #[test]
    fn test_shifted_delimiter_does_not_add() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "go", &mut handler);
        field.handle_key(KeyPress::shifted(Key::Enter), &mut handler);

        assert!(handler.added.is_empty());
        assert_eq!(field.query(), "go");
    }

    #[test]
    fn test_custom_char_delimiter() {
        let props = Props {
            delimiters: vec![Delimiter::Enter, Delimiter::Char(',')],
            ..Props::default()
        };
        let mut field = TagField::new(props);
        let mut handler = Recorder::default();

        type_text(&mut field, "one,two", &mut handler);

        assert_eq!(handler.added, vec![Suggestion::from("one")]);
        assert_eq!(field.query(), "two");
    }

    #[test]
    fn test_delimiter_picks_highlighted_suggestion() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "ind", &mut handler);
        field.handle_key(Key::Down.into(), &mut handler);
        field.handle_key(Key::Down.into(), &mut handler);
        field.handle_key(Key::Enter.into(), &mut handler);

        assert_eq!(handler.added, vec![Suggestion::from("Indonesia")]);
        assert_eq!(field.selected_index(), None);
        assert!(!field.selection_mode());
    }

    #[test]
    fn test_backspace_on_empty_query_deletes_last_tag() {
        let mut field = field();
        let mut handler = Recorder::default();

        field.handle_key(Key::Backspace.into(), &mut handler);
        assert_eq!(handler.deleted, vec![2]);
    }

    #[test]
    fn test_backspace_delete_can_be_disabled() {
        let props = Props {
            allow_delete_from_empty_input: false,
            ..Props::default().with_tags(tags())
        };
        let mut field = TagField::new(props);
        let mut handler = Recorder::default();

        field.handle_key(Key::Backspace.into(), &mut handler);
        assert!(handler.deleted.is_empty());
    }

    #[test]
    fn test_backspace_without_tags_is_quiet() {
        let mut field = TagField::new(Props::default());
        let mut handler = Recorder::default();

        field.handle_key(Key::Backspace.into(), &mut handler);
        assert!(handler.deleted.is_empty());
    }

    #[test]
    fn test_backspace_edits_query() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "abc", &mut handler);
        field.handle_key(Key::Backspace.into(), &mut handler);

        assert_eq!(field.query(), "ab");
        assert!(handler.deleted.is_empty());
        assert_eq!(handler.changes.last().map(String::as_str), Some("ab"));
    }

    #[test]
    fn test_arrows_wrap_at_both_ends() {
        let mut field = field();
        let mut handler = Recorder::default();
        assert_eq!(field.suggestions().len(), 4);

        field.handle_key(Key::Up.into(), &mut handler);
        assert_eq!(field.selected_index(), Some(3));
        assert!(field.selection_mode());

        field.handle_key(Key::Down.into(), &mut handler);
        assert_eq!(field.selected_index(), Some(0));

        field.handle_key(Key::Up.into(), &mut handler);
        assert_eq!(field.selected_index(), Some(3));

        field.handle_key(Key::Up.into(), &mut handler);
        assert_eq!(field.selected_index(), Some(2));

        for _ in 0..2 {
            field.handle_key(Key::Down.into(), &mut handler);
        }
        assert_eq!(field.selected_index(), Some(0));
    }

    #[test]
    fn test_arrows_without_suggestions() {
        let mut field = TagField::new(Props::default());
        let mut handler = Recorder::default();

        field.handle_key(Key::Down.into(), &mut handler);
        field.handle_key(Key::Up.into(), &mut handler);

        assert_eq!(field.selected_index(), None);
        assert!(!field.selection_mode());
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut field = field();
        let mut handler = Recorder::default();

        field.handle_key(Key::Up.into(), &mut handler);
        assert_eq!(field.selected_index(), Some(3));

        type_text(&mut field, "thai", &mut handler);
        assert_eq!(labels(field.suggestions()), vec!["Thailand"]);
        assert_eq!(field.selected_index(), Some(0));

        type_text(&mut field, "zzz", &mut handler);
        assert!(field.suggestions().is_empty());
        assert_eq!(field.selected_index(), None);
    }

    #[test]
    fn test_escape_clears_suggestions() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "in", &mut handler);
        field.handle_key(Key::Down.into(), &mut handler);
        field.handle_key(Key::Esc.into(), &mut handler);

        assert!(field.suggestions().is_empty());
        assert_eq!(field.selected_index(), None);
        assert_eq!(field.query(), "in");
    }

    #[test]
    fn test_change_collapses_spaces() {
        let mut field = field();
        let mut handler = Recorder::default();

        field.handle_change("  new   york  ", &mut handler);
        assert_eq!(field.query(), "new york ");
        assert_eq!(handler.changes, vec!["new york ".to_string()]);
    }

    #[test]
    fn test_paste_splits_on_delimiters() {
        let props = Props {
            delimiters: vec![Delimiter::Enter, Delimiter::Tab, Delimiter::Char(',')],
            ..Props::default()
        };
        let mut field = TagField::new(props);
        let mut handler = Recorder::default();

        let added = field.handle_paste("red, green,,\tblue\r\n, ", &mut handler);

        assert_eq!(added, 3);
        assert_eq!(labels(&handler.added), vec!["red", "green", "blue"]);
    }

    #[test]
    fn test_paste_respects_guard() {
        let mut field = field();
        let mut handler = Recorder {
            veto_add: true,
            ..Recorder::default()
        };

        assert_eq!(field.handle_paste("a\nb", &mut handler), 0);
        assert!(handler.added.is_empty());
    }

    #[test]
    fn test_vetoed_addition_keeps_query() {
        let mut field = field();
        let mut handler = Recorder {
            veto_add: true,
            ..Recorder::default()
        };

        type_text(&mut field, "dup", &mut handler);
        field.handle_key(Key::Enter.into(), &mut handler);

        assert!(handler.added.is_empty());
        assert_eq!(field.query(), "dup");
    }

    #[test]
    fn test_vetoed_deletion() {
        let mut field = field();
        let mut handler = Recorder {
            veto_delete: true,
            ..Recorder::default()
        };

        assert!(!field.delete_tag(0, &mut handler));
        assert!(handler.deleted.is_empty());
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut field = field();
        let mut handler = Recorder::default();

        assert!(!field.delete_tag(3, &mut handler));
        assert!(field.delete_tag(1, &mut handler));
        assert_eq!(handler.deleted, vec![1]);
    }

    #[test]
    fn test_autocomplete_single_match() {
        let props = Props {
            autocomplete: Autocomplete::SingleMatch,
            ..Props::default().with_suggestions(countries())
        };
        let mut field = TagField::new(props);
        let mut handler = Recorder::default();

        field.add_tag(Suggestion::from("thai"), &mut handler);
        field.add_tag(Suggestion::from("ind"), &mut handler);

        assert_eq!(labels(&handler.added), vec!["Thailand", "ind"]);
    }

    #[test]
    fn test_autocomplete_any_match() {
        let props = Props {
            autocomplete: Autocomplete::AnyMatch,
            ..Props::default().with_suggestions(countries())
        };
        let mut field = TagField::new(props);
        let mut handler = Recorder::default();

        field.add_tag(Suggestion::from("ind"), &mut handler);
        field.add_tag(Suggestion::from("peru"), &mut handler);

        assert_eq!(labels(&handler.added), vec!["India", "peru"]);
    }

    #[test]
    fn test_suggestion_click_and_hover() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "land", &mut handler);
        field.hover_suggestion(1);
        assert_eq!(field.selected_index(), Some(1));
        assert!(field.selection_mode());

        assert!(field.click_suggestion(1, &mut handler));
        assert_eq!(labels(&handler.added), vec!["Finland"]);
        assert!(!field.click_suggestion(9, &mut handler));
    }

    #[test]
    fn test_read_only_ignores_input() {
        let props = Props {
            read_only: true,
            ..Props::default().with_tags(tags())
        };
        let mut field = TagField::new(props);
        let mut handler = Recorder::default();

        assert!(!field.is_focused());
        assert_eq!(field.handle_key(Key::Char('x').into(), &mut handler), KeyOutcome::Ignored);
        assert_eq!(field.handle_key(Key::Backspace.into(), &mut handler), KeyOutcome::Ignored);
        assert_eq!(field.handle_paste("a\nb", &mut handler), 0);
        assert!(!field.delete_tag(0, &mut handler));
        assert!(handler.added.is_empty() && handler.deleted.is_empty());

        field.click_tag(1, &mut handler);
        assert_eq!(handler.clicked, vec![1]);

        let view = field.view(&handler);
        assert!(view.input.is_none());
        assert!(view.chips.iter().all(|c| !c.removable));
    }

    #[test]
    fn test_dropdown_needs_min_query_length() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "i", &mut handler);
        assert!(field.visible_suggestions().is_none());

        type_text(&mut field, "n", &mut handler);
        assert_eq!(field.visible_suggestions().map(<[Suggestion]>::len), Some(3));
    }

    #[test]
    fn test_should_render_hook() {
        let hooks = Hooks::default().should_render_suggestions(|_| true);
        let mut field = TagField::with_hooks(Props::default().with_suggestions(countries()), hooks);
        let mut handler = Recorder::default();

        assert_eq!(field.visible_suggestions().map(<[Suggestion]>::len), Some(4));
        type_text(&mut field, "f", &mut handler);
        assert_eq!(field.visible_suggestions().map(<[Suggestion]>::len), Some(1));
    }

    #[test]
    fn test_custom_filter_hook() {
        let hooks = Hooks::default().filter(|query, all| {
            all.iter()
                .filter(|s| s.label().starts_with(query))
                .cloned()
                .collect()
        });
        let mut field = TagField::with_hooks(Props::default().with_suggestions(countries()), hooks);
        let mut handler = Recorder::default();

        type_text(&mut field, "land", &mut handler);
        assert!(field.suggestions().is_empty());
    }

    #[test]
    fn test_new_suggestion_list_is_filtered() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "an", &mut handler);
        field.set_suggestions(vec!["Japan".into(), "Chile".into(), "Ghana".into()]);

        assert_eq!(labels(field.suggestions()), vec!["Japan", "Ghana"]);
    }

    #[test]
    fn test_host_shrinking_list_clamps_selection() {
        let mut field = field();
        let mut handler = Recorder::default();

        field.handle_key(Key::Up.into(), &mut handler);
        assert_eq!(field.selected_index(), Some(3));

        field.set_suggestions(vec!["Japan".into(), "Chile".into()]);
        assert_eq!(field.selected_index(), Some(1));
    }

    #[test]
    fn test_move_tag_reports_positions() {
        let mut field = field();
        let mut handler = Recorder {
            reorder: true,
            ..Recorder::default()
        };

        field.move_tag("c", "a", &mut handler).unwrap();
        assert_eq!(handler.dragged, vec![("c".to_string(), 2, 0)]);

        let err = field.move_tag("zz", "a", &mut handler).unwrap_err();
        assert!(matches!(err, TagFieldError::UnknownTag(id) if id == "zz"));
    }

    #[test]
    fn test_move_tag_requires_reorderable_handler() {
        let mut field = field();
        let mut handler = Recorder::default();

        let err = field.move_tag("a", "b", &mut handler).unwrap_err();
        assert!(matches!(err, TagFieldError::NotReorderable));
        assert!(!field.begin_drag(0, &handler));
    }

    #[test]
    fn test_drag_and_drop() {
        let mut field = field();
        let mut handler = Recorder {
            reorder: true,
            ..Recorder::default()
        };

        assert!(field.begin_drag(0, &handler));
        assert!(field.view(&handler).chips[0].dragging);
        assert!(field.drop_on(2, &mut handler).unwrap());
        assert_eq!(handler.dragged, vec![("a".to_string(), 0, 2)]);
        assert_eq!(field.dragging(), None);

        field.begin_drag(1, &handler);
        assert!(!field.drop_on(1, &mut handler).unwrap());
        assert!(!field.drop_on(0, &mut handler).unwrap());
        assert_eq!(handler.dragged.len(), 1);
    }

    #[test]
    fn test_blur_reports_trimmed_query() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "half typed ", &mut handler);
        field.blur(&mut handler);

        assert!(!field.is_focused());
        assert_eq!(handler.blurred, vec!["half typed".to_string()]);
    }

    #[test]
    fn test_view_uses_tag_renderer_and_placeholder() {
        let hooks = Hooks::default().tag_renderer(|tag| format!("#{}", tag.text));
        let field = TagField::with_hooks(Props::default().with_tags(tags()), hooks);
        let handler = Recorder::default();

        let view = field.view(&handler);
        assert_eq!(view.chips[0].label, "#apple");
        assert!(!view.chips[0].draggable);

        let input = view.input.unwrap();
        assert!(input.is_placeholder);
        assert_eq!(input.text, "Add new tag");
        assert!(input.focused);
    }

    #[test]
    fn test_view_reads_label_field() {
        let spain: Tag = serde_json::from_str(r#"{"id":"es","text":"es","name":"Spain"}"#).unwrap();
        let props = Props {
            label_field: Some("name".to_string()),
            ..Props::default()
        }
        .with_tags(vec![spain, Tag::new("x", "plain")])
        .with_suggestions(countries());
        let mut field = TagField::new(props);
        let mut handler = Recorder::default();

        let view = field.view(&handler);
        assert_eq!(view.chips[0].label, "Spain");
        assert_eq!(view.chips[1].label, "plain");

        // Suggestions still filter on their text
        type_text(&mut field, "spa", &mut handler);
        assert!(field.suggestions().is_empty());
    }

    #[test]
    fn test_view_marks_active_suggestion() {
        let mut field = field();
        let mut handler = Recorder::default();

        type_text(&mut field, "in", &mut handler);
        field.handle_key(Key::Down.into(), &mut handler);
        let view = field.view(&handler);

        assert_eq!(view.suggestions.len(), 3);
        assert!(view.suggestions[0].active);
        assert_eq!(view.suggestions[0].text(), "India");
        assert_eq!(view.suggestions[0].segments[0], Segment::matched("In"));
    }
}
