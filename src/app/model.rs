use std::time::{Duration, Instant};

use crate::editor::EditorBuffer;
use crate::store::{DocumentStore, StoreError};

use super::prompt::Prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which pane receives plain key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Editor,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// The documents being edited
    pub store: DocumentStore,
    /// Editable copy of the active document's content
    pub editor: EditorBuffer,
    /// First editor line shown on screen
    pub editor_scroll_offset: usize,
    pub focus: Focus,
    /// Open input form, if any
    pub prompt: Option<Prompt>,
    /// Whether the preview pane is shown under the editor
    pub preview_visible: bool,
    /// Sidebar width as a percentage of the terminal
    pub sidebar_width_percent: u16,
    pub help_visible: bool,
    /// Last non-empty find term, highlighted in the preview
    pub last_find: Option<String>,
    pub should_quit: bool,
    /// Terminal size (width, height)
    pub terminal_size: (u16, u16),
    toast: Option<Toast>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("documents", &self.store.len())
            .field("active", &self.store.active_index())
            .field("focus", &self.focus)
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model around a freshly initialized store.
    pub fn new(terminal_size: (u16, u16)) -> Self {
        Self::with_store(DocumentStore::initialize(), terminal_size)
    }

    pub fn with_store(store: DocumentStore, terminal_size: (u16, u16)) -> Self {
        let editor = EditorBuffer::from_text(store.active().content());
        Self {
            store,
            editor,
            editor_scroll_offset: 0,
            focus: Focus::Sidebar,
            prompt: None,
            preview_visible: true,
            sidebar_width_percent: crate::ui::DEFAULT_SIDEBAR_PERCENT,
            help_visible: false,
            last_find: None,
            should_quit: false,
            terminal_size,
            toast: None,
        }
    }

    /// Reload the editor from the store's active document.
    ///
    /// Called after any command that changes which document is active or
    /// rewrites its content behind the editor's back.
    pub(super) fn sync_editor_from_store(&mut self) {
        self.editor = EditorBuffer::from_text(self.store.active().content());
        self.editor_scroll_offset = 0;
    }

    /// Push the editor's text into the store.
    pub(super) fn sync_store_from_editor(&mut self) {
        self.store.edit_active(self.editor.text());
    }

    /// Upload raw file bytes as a new document, reporting the outcome.
    pub fn upload_bytes(&mut self, name: &str, raw_bytes: Vec<u8>) {
        match self.store.upload_document(name, raw_bytes) {
            Ok(()) => self.show_toast(ToastLevel::Success, format!("Uploaded document: {name}")),
            Err(err) => self.show_store_error(&err),
        }
    }

    pub(super) fn show_store_error(&mut self, err: &StoreError) {
        let level = match err {
            StoreError::Validation { .. } | StoreError::Precondition(_) => ToastLevel::Warning,
            StoreError::Index { .. } | StoreError::Decode(_) => ToastLevel::Error,
        };
        self.show_toast(level, err.to_string());
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Scroll the editor so the cursor line is inside `visible_rows`.
    pub fn ensure_cursor_visible(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        let line = self.editor.cursor().line;
        if line < self.editor_scroll_offset {
            self.editor_scroll_offset = line;
        } else if line >= self.editor_scroll_offset + visible_rows {
            self.editor_scroll_offset = line + 1 - visible_rows;
        }
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new((80, 24))
    }
}
