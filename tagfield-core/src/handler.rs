use crate::model::{Suggestion, Tag};

/// Callbacks through which a tag field asks its host to change the tags.
///
/// The field never edits the tag list itself. After a mutating callback the
/// host applies the change and hands the new list back with
/// [`TagField::set_tags`](crate::TagField::set_tags).
pub trait TagHandler {
    /// A tag should be added. Receives the typed text or the chosen
    /// suggestion.
    fn on_addition(&mut self, tag: Suggestion);

    /// The tag at `index` should be removed.
    fn on_delete(&mut self, index: usize);

    /// Return `false` to veto an addition.
    fn before_addition(&mut self, _tag: &Suggestion) -> bool {
        true
    }

    /// Return `false` to veto a deletion.
    fn before_delete(&mut self, _index: usize) -> bool {
        true
    }

    /// Whether tags may be dragged; `on_drag` is only called when true.
    fn reorderable(&self) -> bool {
        false
    }

    /// `tag` at position `from` was dropped onto position `to`.
    fn on_drag(&mut self, _tag: &Tag, _from: usize, _to: usize) {}

    fn on_input_change(&mut self, _query: &str) {}

    /// The field lost focus. Receives the trimmed query.
    fn on_input_blur(&mut self, _value: &str) {}

    fn on_tag_click(&mut self, _index: usize) {}
}
