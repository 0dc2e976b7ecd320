//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state, owning the document store
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! After every message the view reads the store again; nothing is pushed
//! to the UI from inside the store.

mod effects;
mod event_loop;
mod input;
mod model;
mod prompt;
mod update;

pub use effects::UPLOAD_EXTENSIONS;
pub use model::{Focus, Model, ToastLevel};
pub use prompt::{Prompt, PromptField, PromptKind};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the startup settings and runs the event loop.
pub struct App {
    initial_files: Vec<PathBuf>,
    preview_visible: bool,
    sidebar_width_percent: u16,
}

impl App {
    pub fn new() -> Self {
        Self {
            initial_files: Vec::new(),
            preview_visible: true,
            sidebar_width_percent: crate::ui::DEFAULT_SIDEBAR_PERCENT,
        }
    }

    /// Text files to upload once the store is initialized.
    pub fn with_initial_files(mut self, files: Vec<PathBuf>) -> Self {
        self.initial_files = files;
        self
    }

    /// Show or hide the preview pane at startup.
    pub const fn with_preview_visible(mut self, visible: bool) -> Self {
        self.preview_visible = visible;
        self
    }

    /// Sidebar width as a percentage, clamped to a usable range.
    pub fn with_sidebar_width(mut self, percent: u16) -> Self {
        self.sidebar_width_percent = percent.clamp(
            crate::ui::MIN_SIDEBAR_PERCENT,
            crate::ui::MAX_SIDEBAR_PERCENT,
        );
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
