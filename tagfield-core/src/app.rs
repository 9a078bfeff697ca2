use crate::config::FieldConfig;
use crate::field::{KeyOutcome, TagField};
use crate::keys::{Key, KeyPress};
use crate::layout::{FieldLayout, Hit};
use crate::model::{Suggestion, Tag};
use crate::store::TagList;
use crate::view::FieldView;

/// Focus area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field,
    Log,
}

/// Where the field was last drawn, for mouse hit-testing
#[derive(Debug, Clone)]
struct Placed {
    x: u16,
    y: u16,
    layout: FieldLayout,
}

/// Platform-agnostic demo session: one tag field hosted by a [`TagList`]
pub struct App {
    pub field: TagField,
    pub tags: TagList,
    pub focus: Focus,
    pub running: bool,

    // Log pane state
    pub log_scroll: usize,

    // Status message
    pub status_message: Option<String>,

    placed: Option<Placed>,
    pressed: Option<usize>,
}

impl App {
    pub fn new(config: &FieldConfig, tags: Vec<Tag>, suggestions: Vec<Suggestion>) -> Self {
        let props = config
            .props()
            .with_tags(tags.clone())
            .with_suggestions(suggestions);
        let focus = if props.autofocus && !props.read_only {
            Focus::Field
        } else {
            Focus::Log
        };

        Self {
            field: TagField::new(props),
            tags: TagList::new(tags).allow_duplicates(config.allow_duplicates),
            focus,
            running: true,
            log_scroll: 0,
            status_message: None,
            placed: None,
            pressed: None,
        }
    }

    pub fn handle_key(&mut self, press: KeyPress) {
        match self.focus {
            Focus::Field => {
                let outcome = self.field.handle_key(press, &mut self.tags);
                self.sync();
                if outcome == KeyOutcome::Ignored && press.key == Key::Tab {
                    self.focus_log();
                }
            }
            Focus::Log => match press.key {
                Key::Tab | Key::Enter | Key::Esc => self.focus_field(),
                Key::Up => {
                    let max = self.tags.events().len().saturating_sub(1);
                    self.log_scroll = (self.log_scroll + 1).min(max);
                }
                Key::Down => self.log_scroll = self.log_scroll.saturating_sub(1),
                _ => {}
            },
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.focus != Focus::Field {
            return;
        }
        let added = self.field.handle_paste(text, &mut self.tags);
        self.sync();
        self.set_status(&format!("Pasted {} tag{}", added, if added == 1 { "" } else { "s" }));
    }

    pub fn focus_field(&mut self) {
        if self.field.is_read_only() {
            return;
        }
        self.field.focus();
        self.focus = Focus::Field;
    }

    pub fn focus_log(&mut self) {
        if self.focus == Focus::Field {
            self.field.blur(&mut self.tags);
        }
        self.focus = Focus::Log;
    }

    /// Terminal window lost focus
    pub fn blur(&mut self) {
        if self.field.is_focused() {
            self.field.blur(&mut self.tags);
        }
    }

    pub fn view(&self) -> FieldView {
        self.field.view(&self.tags)
    }

    /// Remember where the field was drawn, in screen cells
    pub fn set_layout(&mut self, x: u16, y: u16, layout: FieldLayout) {
        self.placed = Some(Placed { x, y, layout });
    }

    pub fn mouse_down(&mut self, column: u16, row: u16) {
        match self.hit(column, row) {
            Some(Hit::Remove(i)) => {
                self.field.delete_tag(i, &mut self.tags);
                self.sync();
            }
            Some(Hit::Tag(i)) => {
                self.pressed = Some(i);
                self.field.begin_drag(i, &self.tags);
            }
            Some(Hit::Suggestion(i)) => {
                self.field.click_suggestion(i, &mut self.tags);
                self.sync();
            }
            Some(Hit::Input) => self.focus_field(),
            None => {}
        }
    }

    pub fn mouse_up(&mut self, column: u16, row: u16) {
        let pressed = self.pressed.take();
        match self.hit(column, row) {
            Some(Hit::Tag(i)) if pressed == Some(i) => {
                self.field.cancel_drag();
                self.field.click_tag(i, &mut self.tags);
            }
            Some(Hit::Tag(i)) => match self.field.drop_on(i, &mut self.tags) {
                Ok(true) => self.sync(),
                Ok(false) => {}
                Err(e) => self.set_status(&e.to_string()),
            },
            _ => self.field.cancel_drag(),
        }
    }

    pub fn mouse_moved(&mut self, column: u16, row: u16) {
        if let Some(Hit::Suggestion(i)) = self.hit(column, row) {
            self.field.hover_suggestion(i);
        }
    }

    /// Set status message
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Get title for display
    pub fn title(&self) -> String {
        let count = self.tags.tags().len();
        format!("{} tag{}", count, if count == 1 { "" } else { "s" })
    }

    fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let placed = self.placed.as_ref()?;
        let x = column.checked_sub(placed.x)?;
        let y = row.checked_sub(placed.y)?;
        placed.layout.hit(x, y)
    }

    fn sync(&mut self) {
        if self.field.tags() != self.tags.tags() {
            self.field.set_tags(self.tags.tags().to_vec());
        }
    }
}
