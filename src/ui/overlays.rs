use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::{Prompt, PromptField};

const HELP_KEYS: &[(&str, &str)] = &[
    ("Tab", "Switch between documents and editor"),
    ("j/k, Up/Down", "Select next / previous document"),
    ("1-9", "Select document by number"),
    ("a", "Add a new document"),
    ("u", "Upload a .txt file"),
    ("r, Ctrl+F", "Replace all occurrences in the active document"),
    ("d", "Delete the active document"),
    ("p", "Toggle preview"),
    ("Esc", "Leave the editor"),
    ("q, Ctrl+C", "Quit"),
];

/// Rows shown for a field that takes several lines.
const MULTILINE_ROWS: u16 = 4;

const fn value_rows(field: &PromptField) -> u16 {
    if field.multiline { MULTILINE_ROWS } else { 1 }
}

pub fn prompt_rect(area: Rect, prompt: &Prompt) -> Rect {
    let popup_width = area.width.saturating_sub(8).clamp(20, 72);
    // A label row plus value rows per field, then borders, padding and the hint row
    let field_rows: u16 = prompt.fields.iter().map(|f| 1 + value_rows(f)).sum();
    let popup_height = (field_rows + 5).min(area.height);
    centered_popup_rect(popup_width, popup_height, area)
}

pub fn render_prompt(prompt: &Prompt, frame: &mut Frame, area: Rect) {
    let popup = prompt_rect(area, prompt);
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, field) in prompt.fields.iter().enumerate() {
        let focused = idx == prompt.focused;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::styled(format!("{}:", field.label), label_style));

        // Show the tail of the value so the end being typed stays visible.
        let rows = usize::from(value_rows(field));
        let value_lines: Vec<&str> = field.value.split('\n').collect();
        let shown = &value_lines[value_lines.len().saturating_sub(rows)..];
        for (row, text) in shown.iter().enumerate() {
            let mut value = vec![Span::raw(format!("  {text}"))];
            if focused && row + 1 == shown.len() {
                value.push(Span::styled(" ", cursor_style));
            }
            lines.push(Line::from(value));
        }
        for _ in shown.len()..rows {
            lines.push(Line::raw(""));
        }
    }
    let hint = if prompt.focused_is_multiline() {
        "Tab: next field · Alt+Enter: new line · Enter: submit · Esc: cancel"
    } else {
        "Tab: next field · Enter: submit · Esc: cancel"
    };
    lines.push(Line::styled(hint, Style::default().fg(Color::Indexed(245))));

    let block = Block::default()
        .title(prompt.kind.title())
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    #[allow(clippy::cast_possible_truncation)]
    let popup_height = (HELP_KEYS.len() as u16 + 4).min(area.height);
    let popup_width = area.width.saturating_sub(12).clamp(20, 70);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let lines: Vec<Line> = HELP_KEYS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:>14}  "),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let block = Block::default()
        .title("Help (any key closes)")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
