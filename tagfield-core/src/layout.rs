//! Flow layout of a [`FieldView`] into character cells.
//!
//! Coordinates are relative to the top-left of the area the field is drawn
//! in. Front ends render at these positions and feed mouse coordinates back
//! through [`FieldLayout::hit`].

use unicode_width::UnicodeWidthStr;

use crate::view::{ChipView, FieldView};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipPlacement {
    pub index: usize,
    pub area: Area,
    /// Cells of the remove glyph, when the chip is removable
    pub remove: Option<Area>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tag(usize),
    Remove(usize),
    Suggestion(usize),
    Input,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLayout {
    pub chips: Vec<ChipPlacement>,
    pub input: Option<Area>,
    pub suggestions: Vec<Area>,
    /// Rows needed to show everything, dropdown included
    pub height: u16,
}

impl FieldLayout {
    /// What sits at cell (x, y). Dropdown rows win over anything they cover.
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        if let Some(i) = self.suggestions.iter().position(|a| a.contains(x, y)) {
            return Some(Hit::Suggestion(i));
        }
        for chip in &self.chips {
            if chip.remove.is_some_and(|r| r.contains(x, y)) {
                return Some(Hit::Remove(chip.index));
            }
            if chip.area.contains(x, y) {
                return Some(Hit::Tag(chip.index));
            }
        }
        match self.input {
            Some(input) if input.contains(x, y) => Some(Hit::Input),
            _ => None,
        }
    }
}

/// Text of a chip as drawn: the label padded by one cell, then the remove
/// glyph for removable chips.
pub fn chip_text(chip: &ChipView, remove_glyph: &str) -> String {
    if chip.removable {
        format!(" {} {} ", chip.label, remove_glyph)
    } else {
        format!(" {} ", chip.label)
    }
}

pub fn layout(view: &FieldView, width: u16) -> FieldLayout {
    let width = width.max(1);
    let mut placed = FieldLayout::default();
    let mut x: u16 = 0;
    let mut y: u16 = 0;

    for chip in &view.chips {
        let w = cells(&chip_text(chip, &view.remove_glyph)).min(width);
        if x > 0 && u32::from(x) + u32::from(w) > u32::from(width) {
            x = 0;
            y += 1;
        }

        let remove = chip.removable.then(|| {
            let offset = cells(&chip.label) + 2;
            let glyph = cells(&view.remove_glyph);
            Area::new(x.saturating_add(offset), y, glyph, 1)
        });
        placed.chips.push(ChipPlacement {
            index: chip.index,
            area: Area::new(x, y, w, 1),
            remove: remove.filter(|r| r.x < x.saturating_add(w)),
        });
        x = x.saturating_add(w).saturating_add(1);
    }

    if let Some(input) = &view.input {
        let w = (cells(&input.text) + 1).min(width);
        let wraps = if view.inline {
            x > 0 && u32::from(x) + u32::from(w) > u32::from(width)
        } else {
            !view.chips.is_empty()
        };
        if wraps {
            x = 0;
            y += 1;
        }

        let area = Area::new(x, y, width.saturating_sub(x).max(w), 1);
        placed.input = Some(area);

        if !view.suggestions.is_empty() {
            let longest = view
                .suggestions
                .iter()
                .map(|s| cells(&s.text()))
                .max()
                .unwrap_or(0);
            let w = longest.saturating_add(2).min(width);
            let left = x.min(width - w);
            for (row, _) in view.suggestions.iter().enumerate() {
                let row = u16::try_from(row).unwrap_or(u16::MAX);
                placed
                    .suggestions
                    .push(Area::new(left, y.saturating_add(1).saturating_add(row), w, 1));
            }
        }
    }

    let last_row = placed
        .suggestions
        .last()
        .map(|a| a.y)
        .unwrap_or(y);
    placed.height = last_row.saturating_add(1);
    placed
}

fn cells(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}
