use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::model::Focus;
use crate::app::prompt::PromptKind;
use crate::app::{App, Message, Model};
use crate::editor::Direction;

impl App {
    pub(super) fn handle_event(&self, event: Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(key, model),
            Event::Resize(w, h) => Some(Message::Resize(w, h)),
            Event::FocusGained => Some(Message::Redraw),
            _ => None,
        }
    }
}

/// Map a key press to a message given the current focus and prompt.
pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    if let Some(prompt) = &model.prompt {
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let newline =
            (alt && key.code == KeyCode::Enter) || (ctrl && key.code == KeyCode::Char('j'));
        if newline && prompt.focused_is_multiline() {
            return Some(Message::PromptInput('\n'));
        }
        return match key.code {
            KeyCode::Esc => Some(Message::PromptCancel),
            KeyCode::Tab | KeyCode::BackTab => Some(Message::PromptNextField),
            KeyCode::Backspace => Some(Message::PromptBackspace),
            KeyCode::Enter if prompt.kind == PromptKind::Upload => {
                Some(Message::UploadFile(PathBuf::from(prompt.value(0).trim())))
            }
            KeyCode::Enter => Some(Message::PromptSubmit),
            KeyCode::Char(c) if !ctrl => Some(Message::PromptInput(c)),
            _ => None,
        };
    }

    if model.help_visible {
        return Some(Message::HideHelp);
    }

    if ctrl && key.code == KeyCode::Char('f') {
        return Some(Message::OpenPrompt(PromptKind::Replace));
    }

    match model.focus {
        Focus::Sidebar => handle_sidebar_key(key),
        Focus::Editor => handle_editor_key(key, ctrl),
    }
}

fn handle_sidebar_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectPrevious),
        KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectNext),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
            Some(Message::SelectDocument(index))
        }
        KeyCode::Char('a') => Some(Message::OpenPrompt(PromptKind::AddDocument)),
        KeyCode::Char('u') => Some(Message::OpenPrompt(PromptKind::Upload)),
        KeyCode::Char('r') => Some(Message::OpenPrompt(PromptKind::Replace)),
        KeyCode::Char('d') => Some(Message::DeleteActive),
        KeyCode::Char('p') => Some(Message::TogglePreview),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Tab | KeyCode::Enter | KeyCode::Char('e') => Some(Message::SwitchFocus),
        _ => None,
    }
}

fn handle_editor_key(key: KeyEvent, ctrl: bool) -> Option<Message> {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => Some(Message::SwitchFocus),
        KeyCode::Home if ctrl => Some(Message::EditorMoveToStart),
        KeyCode::End if ctrl => Some(Message::EditorMoveToEnd),
        KeyCode::Home => Some(Message::EditorMoveHome),
        KeyCode::End => Some(Message::EditorMoveEnd),
        KeyCode::Left => Some(Message::EditorMoveCursor(Direction::Left)),
        KeyCode::Right => Some(Message::EditorMoveCursor(Direction::Right)),
        KeyCode::Up => Some(Message::EditorMoveCursor(Direction::Up)),
        KeyCode::Down => Some(Message::EditorMoveCursor(Direction::Down)),
        KeyCode::Enter => Some(Message::EditorNewline),
        KeyCode::Backspace => Some(Message::EditorDeleteBack),
        KeyCode::Delete => Some(Message::EditorDeleteForward),
        KeyCode::Char(c) if !ctrl => Some(Message::EditorInsertChar(c)),
        _ => None,
    }
}
