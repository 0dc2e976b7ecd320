use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{Focus, Model};
use crate::search;

use super::{EDITOR_HEIGHT_PERCENT, overlays, status};

pub fn split_main_columns(area: Rect, sidebar_percent: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(sidebar_percent),
            Constraint::Percentage(100 - sidebar_percent),
        ])
        .split(area)
}

/// Split the main column into editor and (optionally) preview areas.
pub fn split_body(area: Rect, preview_visible: bool) -> (Rect, Option<Rect>) {
    if !preview_visible {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(EDITOR_HEIGHT_PERCENT),
            Constraint::Percentage(100 - EDITOR_HEIGHT_PERCENT),
        ])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();

    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let body = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    let columns = split_main_columns(body, model.sidebar_width_percent);
    render_sidebar(model, frame, columns[0]);

    let (editor_area, preview_area) = split_body(columns[1], model.preview_visible);
    render_editor(model, frame, editor_area);
    if let Some(preview_area) = preview_area {
        render_preview(model, frame, preview_area);
    }

    if toast_active && area.height >= 2 {
        let toast_area = Rect {
            y: area.y + area.height - 2,
            height: 1,
            ..area
        };
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    if let Some(prompt) = &model.prompt {
        overlays::render_prompt(prompt, frame, area);
    } else if model.help_visible {
        overlays::render_help_overlay(frame, area);
    }
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn render_sidebar(model: &Model, frame: &mut Frame, area: Rect) {
    let active = model.store.active_index();
    let visible_rows = area.height.saturating_sub(2) as usize;
    // Keep the active entry on screen.
    let start = (active + 1).saturating_sub(visible_rows);

    let items: Vec<Line> = model
        .store
        .titles()
        .into_iter()
        .enumerate()
        .skip(start)
        .take(visible_rows)
        .map(|(i, title)| {
            let marker = if i == active { ">" } else { " " };
            let text = format!("{marker}{:>2}. {title}", i + 1);
            if i == active {
                Line::styled(text, Style::default().add_modifier(Modifier::BOLD).reversed())
            } else {
                Line::raw(text)
            }
        })
        .collect();

    let block = Block::default()
        .title(format!("Documents ({})", model.store.len()))
        .borders(Borders::ALL)
        .border_style(focus_border(model.focus == Focus::Sidebar));

    frame.render_widget(Paragraph::new(items).block(block), area);
}

fn render_editor(model: &mut Model, frame: &mut Frame, area: Rect) {
    let focused = model.focus == Focus::Editor;
    let block = Block::default()
        .title(format!("Editing: {}", model.store.active().title()))
        .borders(Borders::ALL)
        .border_style(focus_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_rows = inner.height as usize;
    model.ensure_cursor_visible(visible_rows);

    let buf = &model.editor;
    let total_lines = buf.line_count();
    let gutter_width = line_number_width(total_lines);
    let gutter = Rect {
        width: (gutter_width + 1).min(inner.width),
        ..inner
    };
    let text_area = Rect {
        x: inner.x + gutter.width,
        width: inner.width.saturating_sub(gutter.width),
        ..inner
    };

    let start = model.editor_scroll_offset;
    let end = (start + visible_rows).min(total_lines);
    let cursor = buf.cursor();

    // Scroll horizontally just enough to keep the cursor column visible.
    let cursor_line = buf.line_at(cursor.line).unwrap_or_default();
    let cursor_x = cursor_line[..cursor.col.min(cursor_line.len())].width();
    let h_scroll = cursor_x.saturating_sub(text_area.width.saturating_sub(1) as usize);

    let mut numbers: Vec<Line> = Vec::with_capacity(end.saturating_sub(start));
    let mut lines: Vec<Line> = Vec::with_capacity(end.saturating_sub(start));
    for line_idx in start..end {
        let text = buf.line_at(line_idx).unwrap_or_default();
        numbers.push(Line::styled(
            format!("{:>width$} ", line_idx + 1, width = gutter_width as usize),
            Style::default().fg(Color::DarkGray),
        ));

        if focused && line_idx == cursor.line {
            let col = cursor.col.min(text.len());
            let (before, rest) = text.split_at(col);
            let under = rest.chars().next().map_or(1, char::len_utf8).min(rest.len());
            let cursor_char = if rest.is_empty() { " " } else { &rest[..under] };
            lines.push(Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled(
                    cursor_char.to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ),
                Span::raw(rest[under..].to_string()),
            ]));
        } else {
            lines.push(Line::raw(text));
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let h_scroll = h_scroll.min(u16::MAX as usize) as u16;
    frame.render_widget(Paragraph::new(numbers), gutter);
    frame.render_widget(Paragraph::new(lines).scroll((0, h_scroll)), text_area);
}

fn render_preview(model: &Model, frame: &mut Frame, area: Rect) {
    let content = model.store.active().content();
    let find = model.last_find.as_deref().unwrap_or_default();
    let highlight = Style::default().bg(Color::Yellow).fg(Color::Black);

    let lines: Vec<Line> = content
        .split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut spans = Vec::new();
            let mut last = 0;
            for range in search::find_matches(line, find) {
                if range.start > last {
                    spans.push(Span::raw(line[last..range.start].to_string()));
                }
                spans.push(Span::styled(line[range.clone()].to_string(), highlight));
                last = range.end;
            }
            if last < line.len() {
                spans.push(Span::raw(line[last..].to_string()));
            }
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .title("Preview")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let preview = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(preview, area);
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
