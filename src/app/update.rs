use std::path::PathBuf;

use crate::app::model::{Focus, ToastLevel};
use crate::app::prompt::{Prompt, PromptKind};
use crate::app::Model;
use crate::editor::Direction;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Document list
    /// Make the previous document active
    SelectPrevious,
    /// Make the next document active
    SelectNext,
    /// Make the document at this index active
    SelectDocument(usize),
    /// Delete the active document
    DeleteActive,
    /// Switch focus between sidebar and editor
    SwitchFocus,

    // Prompts
    /// Open an input form
    OpenPrompt(PromptKind),
    /// Type into the focused prompt field
    PromptInput(char),
    /// Delete the last character of the focused prompt field
    PromptBackspace,
    /// Move to the next prompt field
    PromptNextField,
    /// Run the command the prompt collects input for
    PromptSubmit,
    /// Close the prompt without running anything
    PromptCancel,
    /// Read a file from disk and add it as a document (side effect)
    UploadFile(PathBuf),

    // Editor
    EditorInsertChar(char),
    EditorNewline,
    EditorDeleteBack,
    EditorDeleteForward,
    EditorMoveCursor(Direction),
    EditorMoveHome,
    EditorMoveEnd,
    EditorMoveToStart,
    EditorMoveToEnd,

    // View
    TogglePreview,
    ToggleHelp,
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// Store commands run here; reading files for uploads happens afterwards
/// in the side-effect pass.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::SelectPrevious => {
            let index = model.store.active_index();
            if index > 0 {
                select(&mut model, index - 1);
            }
        }
        Message::SelectNext => {
            let index = model.store.active_index();
            if index + 1 < model.store.len() {
                select(&mut model, index + 1);
            }
        }
        Message::SelectDocument(index) => select(&mut model, index),
        Message::DeleteActive => match model.store.delete_active_document() {
            Ok(removed) => {
                model.sync_editor_from_store();
                model.show_toast(
                    ToastLevel::Info,
                    format!("Deleted document: {}", removed.title()),
                );
            }
            Err(err) => model.show_store_error(&err),
        },
        Message::SwitchFocus => {
            model.focus = match model.focus {
                Focus::Sidebar => Focus::Editor,
                Focus::Editor => Focus::Sidebar,
            };
        }

        Message::OpenPrompt(kind) => {
            model.help_visible = false;
            model.prompt = Some(match (kind, model.last_find.as_deref()) {
                (PromptKind::Replace, Some(find)) => Prompt::replace_with_find(find),
                _ => Prompt::new(kind),
            });
        }
        Message::PromptInput(ch) => {
            if let Some(prompt) = model.prompt.as_mut() {
                prompt.push(ch);
            }
        }
        Message::PromptBackspace => {
            if let Some(prompt) = model.prompt.as_mut() {
                prompt.backspace();
            }
        }
        Message::PromptNextField => {
            if let Some(prompt) = model.prompt.as_mut() {
                prompt.next_field();
            }
        }
        Message::PromptSubmit => {
            if let Some(prompt) = model.prompt.take() {
                submit_prompt(&mut model, prompt);
            }
        }
        Message::PromptCancel => model.prompt = None,
        Message::UploadFile(_) => model.prompt = None,

        Message::EditorInsertChar(ch) => {
            model.editor.insert_char(ch);
            model.sync_store_from_editor();
        }
        Message::EditorNewline => {
            model.editor.insert_newline();
            model.sync_store_from_editor();
        }
        Message::EditorDeleteBack => {
            if model.editor.delete_back() {
                model.sync_store_from_editor();
            }
        }
        Message::EditorDeleteForward => {
            if model.editor.delete_forward() {
                model.sync_store_from_editor();
            }
        }
        Message::EditorMoveCursor(direction) => model.editor.move_cursor(direction),
        Message::EditorMoveHome => model.editor.move_home(),
        Message::EditorMoveEnd => model.editor.move_end(),
        Message::EditorMoveToStart => model.editor.move_to_start(),
        Message::EditorMoveToEnd => model.editor.move_to_end(),

        Message::TogglePreview => model.preview_visible = !model.preview_visible,
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => model.terminal_size = (width, height),
        Message::Redraw => {}

        Message::Quit => model.should_quit = true,
    }

    model
}

fn select(model: &mut Model, index: usize) {
    match model.store.select_document(index) {
        Ok(()) => model.sync_editor_from_store(),
        Err(err) => model.show_store_error(&err),
    }
}

fn submit_prompt(model: &mut Model, prompt: Prompt) {
    match prompt.kind {
        PromptKind::AddDocument => {
            let title = prompt.value(0);
            if title.is_empty() {
                model.show_toast(ToastLevel::Warning, "Please provide a document title");
                model.prompt = Some(prompt);
                return;
            }
            match model.store.add_document(title, prompt.value(1)) {
                Ok(()) => model.show_toast(ToastLevel::Success, format!("Added document: {title}")),
                Err(err) => model.show_store_error(&err),
            }
        }
        PromptKind::Replace => {
            let target = prompt.value(0);
            if target.is_empty() {
                model.show_toast(ToastLevel::Warning, "Please enter text to find");
                model.prompt = Some(prompt);
                return;
            }
            match model.store.replace_in_active(target, prompt.value(1)) {
                Ok(0) => {
                    model.show_toast(ToastLevel::Info, format!("No occurrences of '{target}' found"));
                }
                Ok(count) => {
                    model.sync_editor_from_store();
                    model.show_toast(
                        ToastLevel::Success,
                        format!("Replaced {count} occurrences of '{target}'"),
                    );
                }
                Err(err) => model.show_store_error(&err),
            }
            model.last_find = Some(target.to_string());
        }
        // Enter in the upload prompt is mapped to `UploadFile` by the input
        // layer; a bare submit just keeps the form open.
        PromptKind::Upload => model.prompt = Some(prompt),
    }
}
