//! Terminal UI rendering for Tagfield Web
//!
//! Mirrors tagfield-cli's UI on ratzilla's backend. The browser host is
//! keyboard-only, so no hit-test layout is stored.

use ratzilla::ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use tagfield_core::{layout, App, Area, FieldLayout, FieldView, Focus, Palette, Rgb, SlotStyle};

const SURFACE0: Color = Color::Rgb(49, 50, 68);
const TEXT: Color = Color::Rgb(205, 214, 244);
const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
const BLUE: Color = Color::Rgb(137, 180, 250);

pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let palette = app.field.props().palette;

    let placed = layout(&view, frame.area().width.saturating_sub(2));
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

    let title = Paragraph::new(format!(" Tagfield (Web) - {}", app.title()))
        .style(Style::default().fg(TEXT).bg(SURFACE0));
    frame.render_widget(title, chunks[0]);

    let inner = draw_field(frame, app, &view, &placed, &palette, chunks[1]);
    draw_log(frame, app, chunks[2]);
    draw_suggestions(frame, &view, &placed, &palette, inner);
    draw_status_bar(frame, app, chunks[3]);
}

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
        let tag_style = style(palette.tag);
        let mut spans = vec![Span::styled(format!(" {} ", chip.label), tag_style)];
        if chip.removable {
            spans.push(Span::styled(view.remove_glyph.clone(), style(palette.remove)));
            spans.push(Span::styled(" ", tag_style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            cell_rect(inner, placement.area),
        );
    }

    if let (Some(input), Some(input_area)) = (&view.input, placed.input) {
        let mut text = input.text.clone();
        let input_style = if input.is_placeholder {
            style(palette.tag_input).add_modifier(Modifier::ITALIC)
        } else {
            style(palette.tag_input_field)
        };
        // No terminal cursor in the DOM, draw one
        if input.focused && app.focus == Focus::Field && !input.is_placeholder {
            text.push('▏');
        }
        frame.render_widget(
            Paragraph::new(text).style(input_style),
            cell_rect(inner, input_area),
        );
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
        spans.extend(row.segments.iter().map(|segment| {
            let segment_style = if segment.matched {
                base.patch(style(palette.tag_label))
            } else {
                base
            };
            Span::styled(segment.text.clone(), segment_style)
        }));

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
        .map(|event| ListItem::new(event.kind.to_string()).style(Style::default().fg(TEXT)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help_hint = match app.focus {
        Focus::Field => "Enter add | ↑/↓ pick | Esc close | Backspace delete | Tab events | Ctrl+S download",
        Focus::Log => "↑/↓ scroll | Tab back to field | Ctrl+S download",
    };
    let status = app.status_message.as_deref().unwrap_or(help_hint);

    let status_bar =
        Paragraph::new(format!(" {}", status)).style(Style::default().fg(SUBTEXT0).bg(SURFACE0));
    frame.render_widget(status_bar, area);
}

fn cell_rect(inner: Rect, area: Area) -> Rect {
    let x = inner.x.saturating_add(area.x);
    let y = inner.y.saturating_add(area.y);
    let width = area.width.min(inner.right().saturating_sub(x));
    Rect::new(x, y, width, area.height)
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
