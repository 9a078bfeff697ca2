use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use tagfield_core::{
    chip_text, layout, App, Area, FieldLayout, FieldView, Focus, Palette, Rgb, SlotStyle,
};

const SURFACE0: Color = Color::Rgb(49, 50, 68);
const TEXT: Color = Color::Rgb(205, 214, 244);
const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
const BLUE: Color = Color::Rgb(137, 180, 250);

pub fn draw(frame: &mut Frame, app: &mut App) {
    let view = app.view();
    let palette = app.field.props().palette;

    // Borders take two columns
    let inner_width = frame.area().width.saturating_sub(2);
    let placed = layout(&view, inner_width);
    let body_rows = placed
        .chips
        .iter()
        .map(|c| c.area.y + 1)
        .chain(placed.input.map(|a| a.y + 1))
        .max()
        .unwrap_or(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title bar
            Constraint::Length(body_rows + 2), // Tag field
            Constraint::Min(0),                // Event log
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    let inner = draw_field(frame, app, &view, &placed, &palette, chunks[1]);
    draw_log(frame, app, chunks[2]);
    draw_suggestions(frame, &view, &placed, &palette, inner);
    draw_status_bar(frame, app, chunks[3]);

    app.set_layout(inner.x, inner.y, placed);
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode = if app.field.is_read_only() { " (read-only)" } else { "" };
    let title_text = format!(" Tagfield - {}{}", app.title(), mode);

    let title_bar = Paragraph::new(title_text).style(Style::default().fg(TEXT).bg(SURFACE0));
    frame.render_widget(title_bar, area);
}

/// Draw chips and input; returns the inner area the layout is relative to
fn draw_field(
    frame: &mut Frame,
    app: &App,
    view: &FieldView,
    placed: &FieldLayout,
    palette: &Palette,
    area: Rect,
) -> Rect {
    let border_style = if app.focus == Focus::Field {
        style(palette.tags)
    } else {
        Style::default().fg(SUBTEXT0)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Tags");

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new("").style(style(palette.selected)), inner);

    for (chip, placement) in view.chips.iter().zip(&placed.chips) {
        let mut tag_style = style(palette.tag);
        if chip.dragging {
            tag_style = tag_style.add_modifier(Modifier::REVERSED);
        }

        let spans = if chip.removable {
            vec![
                Span::styled(format!(" {} ", chip.label), tag_style),
                Span::styled(view.remove_glyph.clone(), style(palette.remove)),
                Span::styled(" ", tag_style),
            ]
        } else {
            vec![Span::styled(chip_text(chip, &view.remove_glyph), tag_style)]
        };

        let rect = cell_rect(inner, placement.area);
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }

    if let (Some(input), Some(input_area)) = (&view.input, placed.input) {
        let input_style = if input.is_placeholder {
            style(palette.tag_input).add_modifier(Modifier::ITALIC)
        } else {
            style(palette.tag_input_field)
        };

        let rect = cell_rect(inner, input_area);
        frame.render_widget(Paragraph::new(input.text.clone()).style(input_style), rect);

        if input.focused && app.focus == Focus::Field {
            let x = cursor_column(rect.x, input.cursor, inner.right());
            frame.set_cursor_position((x, rect.y));
        }
    }

    inner
}

fn draw_suggestions(
    frame: &mut Frame,
    view: &FieldView,
    placed: &FieldLayout,
    palette: &Palette,
    inner: Rect,
) {
    let screen = frame.area();

    for (row, area) in view.suggestions.iter().zip(&placed.suggestions) {
        let rect = cell_rect(inner, *area).intersection(screen);
        if rect.is_empty() {
            continue;
        }

        let base = if row.active {
            style(palette.active_suggestion)
        } else {
            style(palette.suggestions)
        };
        let mut spans = vec![Span::styled(" ", base)];
        for segment in &row.segments {
            let segment_style = if segment.matched {
                base.patch(style(palette.tag_label))
            } else {
                base
            };
            spans.push(Span::styled(segment.text.clone(), segment_style));
        }

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), rect);
    }
}

fn draw_log(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == Focus::Log {
        Style::default().fg(BLUE)
    } else {
        Style::default().fg(SUBTEXT0)
    };

    let events = app.tags.events();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("Events ({})", events.len()));

    let visible = block.inner(area).height as usize;
    let end = events.len().saturating_sub(app.log_scroll);
    let start = end.saturating_sub(visible);

    let items: Vec<ListItem> = events[start..end]
        .iter()
        .map(|event| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", event.at.format("%H:%M:%S")),
                    Style::default().fg(SUBTEXT0),
                ),
                Span::styled(event.kind.to_string(), Style::default().fg(TEXT)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focus_str = match app.focus {
        Focus::Field => "FIELD",
        Focus::Log => "EVENTS",
    };

    let status = app.status_message.as_deref().unwrap_or("");

    let help_hint = match app.focus {
        Focus::Field => "Enter add | ↑/↓ pick | Esc close | Backspace delete | Tab events | Ctrl+Q quit",
        Focus::Log => "↑/↓ scroll | Tab back to field | Ctrl+Q quit",
    };

    let status_text = format!(
        " {} | {}",
        focus_str,
        if status.is_empty() { help_hint } else { status },
    );

    let status_bar = Paragraph::new(status_text).style(Style::default().fg(SUBTEXT0).bg(SURFACE0));
    frame.render_widget(status_bar, area);
}

/// Translate a layout cell area into a screen rect, clipped to the
/// columns of `inner`
fn cell_rect(inner: Rect, area: Area) -> Rect {
    let x = inner.x.saturating_add(area.x);
    let y = inner.y.saturating_add(area.y);
    let width = area.width.min(inner.right().saturating_sub(x));
    Rect::new(x, y, width, area.height)
}

/// Column of the input cursor, kept left of `right`
fn cursor_column(start: u16, cursor: usize, right: u16) -> u16 {
    let offset = u16::try_from(cursor).unwrap_or(u16::MAX);
    start.saturating_add(offset).min(right.saturating_sub(1))
}

fn style(slot: SlotStyle) -> Style {
    let mut style = Style::default();
    if let Some(fg) = slot.fg {
        style = style.fg(color(fg));
    }
    if let Some(bg) = slot.bg {
        style = style.bg(color(bg));
    }
    if slot.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if slot.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_column_stays_inside_field() {
        assert_eq!(cursor_column(10, 4, 60), 14);
        assert_eq!(cursor_column(10, 70_000, 60), 59);
        assert_eq!(cursor_column(10, usize::MAX, 60), 59);
    }
}
