//! Tagfield Core - Platform-agnostic tag-input widget
//!
//! This crate holds the interaction state machine of a tag-input field:
//! query text, suggestion filtering, keyboard navigation and the callbacks
//! through which the host application owns the tags. It has no rendering
//! dependency; the CLI and WASM front ends draw its view model.

pub mod app;
pub mod config;
pub mod error;
pub mod field;
pub mod filter;
pub mod handler;
pub mod keys;
pub mod layout;
pub mod model;
pub mod props;
pub mod store;
pub mod theme;
pub mod view;

pub use app::{App, Focus};
pub use config::{FieldConfig, LoggingConfig};
pub use error::{ConfigError, TagFieldError};
pub use field::{KeyOutcome, TagField};
pub use filter::{filter_suggestions, highlight, Segment};
pub use handler::TagHandler;
pub use keys::{Delimiter, Key, KeyPress};
pub use layout::{chip_text, layout, Area, FieldLayout, Hit};
pub use model::{Suggestion, Tag};
pub use props::{Autocomplete, Hooks, Props};
pub use store::{sample_suggestions, to_json, EventKind, TagEvent, TagList};
pub use theme::{Palette, PaletteOverrides, Rgb, SlotStyle};
pub use view::{ChipView, FieldView, InputView, SuggestionView};
