use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Focus, Model, ToastLevel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let store = &model.store;
    let cursor = model.editor.cursor();
    let hints = match model.focus {
        Focus::Sidebar => "a:add  u:upload  r:replace  d:delete  Tab:edit  ?:help",
        Focus::Editor => "Esc:documents  Ctrl+F:replace",
    };
    let preview_indicator = if model.preview_visible { "" } else { " [no preview]" };

    let status = format!(
        " {}/{}  {}  Ln {}, Col {}{}  {}",
        store.active_index() + 1,
        store.len(),
        store.active().title(),
        cursor.line + 1,
        cursor.col + 1,
        preview_indicator,
        hints
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Success => ("[ok]", Style::default().bg(Color::Green).fg(Color::Black)),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let bar = Paragraph::new(format!(" {prefix} {message}")).style(style);
    frame.render_widget(bar, area);
}
