//! Terminal UI components.
//!
//! Rendering reads the model (and through it the document store) on every
//! frame; it never mutates documents.
//!
//! - sidebar: document titles, active one highlighted
//! - editor: the active document with a cursor
//! - preview: wrapped content with find matches highlighted
//! - footer: toast and status bar; prompts and help are popups

mod overlays;
mod render;
mod status;

pub use overlays::{centered_popup_rect, prompt_rect};
pub use render::{line_number_width, render, split_body, split_main_columns};

pub const DEFAULT_SIDEBAR_PERCENT: u16 = 25;
pub const MIN_SIDEBAR_PERCENT: u16 = 10;
pub const MAX_SIDEBAR_PERCENT: u16 = 60;
/// Share of the main column given to the editor when the preview is shown.
pub const EDITOR_HEIGHT_PERCENT: u16 = 60;
