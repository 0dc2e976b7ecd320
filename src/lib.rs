// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. store::StoreError)
    clippy::module_name_repetitions
)]

//! # mailedit
//!
//! A terminal editor for a small in-memory collection of mail templates.
//!
//! Documents can be added, uploaded from `.txt` files, selected, deleted,
//! edited live with a preview, and rewritten with bulk find/replace.
//! Nothing is persisted: a session starts from one sample template and
//! ends when the editor quits.
//!
//! ## Architecture
//!
//! The [`store`] is the core and knows nothing about the terminal. The
//! [`app`] follows The Elm Architecture (TEA):
//! - **Model**: Application state, owning the store
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions that issue store commands
//! - **View**: Render to terminal, re-reading the store every frame
//!
//! ## Modules
//!
//! - [`store`]: Documents and the active-document pointer
//! - [`search`]: Literal find/replace
//! - [`editor`]: Rope-backed editing buffer
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod search;
pub mod store;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::store::{Document, DocumentStore, StoreError};
}
