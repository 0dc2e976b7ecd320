//! Text buffer for editing the active document in place.
//!
//! A rope-backed buffer with a byte-column cursor. The application pushes
//! the buffer text back into the store after every edit.

mod buffer;

pub use buffer::{Cursor, Direction, EditorBuffer};
