//! Style slots for the widget's parts, with user overrides merged over
//! the defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A 24-bit colour written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value.strip_prefix('#').unwrap_or(&value);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(value));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ConfigError::InvalidColor(value.clone()))
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

// Catppuccin Mocha
pub const BASE: Rgb = Rgb(30, 30, 46);
pub const SURFACE0: Rgb = Rgb(49, 50, 68);
pub const SURFACE1: Rgb = Rgb(69, 71, 90);
pub const TEXT: Rgb = Rgb(205, 214, 244);
pub const SUBTEXT0: Rgb = Rgb(166, 173, 200);
pub const RED: Rgb = Rgb(243, 139, 168);
pub const YELLOW: Rgb = Rgb(249, 226, 175);
pub const BLUE: Rgb = Rgb(137, 180, 250);
pub const MAUVE: Rgb = Rgb(203, 166, 247);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub underline: bool,
}

impl SlotStyle {
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
            underline: false,
        }
    }

    pub const fn on(self, color: Rgb) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn underline(self) -> Self {
        Self {
            underline: true,
            ..self
        }
    }
}

/// One style per part of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Outer frame of the widget
    pub tags: SlotStyle,
    /// Area around the text input
    pub tag_input: SlotStyle,
    /// Typed text and placeholder
    pub tag_input_field: SlotStyle,
    /// Row holding the selected tags
    pub selected: SlotStyle,
    pub tag: SlotStyle,
    pub remove: SlotStyle,
    pub suggestions: SlotStyle,
    pub active_suggestion: SlotStyle,
    /// Matched part of a suggestion label
    pub tag_label: SlotStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tags: SlotStyle::fg(BLUE),
            tag_input: SlotStyle::fg(SUBTEXT0),
            tag_input_field: SlotStyle::fg(TEXT),
            selected: SlotStyle::fg(TEXT),
            tag: SlotStyle::fg(BASE).on(MAUVE),
            remove: SlotStyle::fg(RED).on(MAUVE).bold(),
            suggestions: SlotStyle::fg(TEXT).on(SURFACE0),
            active_suggestion: SlotStyle::fg(TEXT).on(SURFACE1).bold(),
            tag_label: SlotStyle::fg(YELLOW).underline(),
        }
    }
}

/// Partial palette from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<SlotStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_input: Option<SlotStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_input_field: Option<SlotStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<SlotStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<SlotStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<SlotStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<SlotStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_suggestion: Option<SlotStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_label: Option<SlotStyle>,
}

impl Palette {
    pub fn merged(overrides: &PaletteOverrides) -> Self {
        let base = Palette::default();
        Self {
            tags: overrides.tags.unwrap_or(base.tags),
            tag_input: overrides.tag_input.unwrap_or(base.tag_input),
            tag_input_field: overrides.tag_input_field.unwrap_or(base.tag_input_field),
            selected: overrides.selected.unwrap_or(base.selected),
            tag: overrides.tag.unwrap_or(base.tag),
            remove: overrides.remove.unwrap_or(base.remove),
            suggestions: overrides.suggestions.unwrap_or(base.suggestions),
            active_suggestion: overrides.active_suggestion.unwrap_or(base.active_suggestion),
            tag_label: overrides.tag_label.unwrap_or(base.tag_label),
        }
    }
}
