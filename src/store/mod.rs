//! In-memory document store.
//!
//! Holds an ordered, never-empty list of [`Document`]s and the index of the
//! active one. The store is driven by commands and read back with queries:
//! callers re-read state after each command instead of being notified.
//!
//! Invariants held across every command:
//! - at least one document is present
//! - `active_index < len()`
//! - a rejected command changes nothing

mod error;
mod types;

pub use error::{Result, StoreError};
pub use types::{Document, SAMPLE_CONTENT, SAMPLE_TITLE};

use crate::search;

/// Ordered documents plus the active-document pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStore {
    documents: Vec<Document>,
    active_index: usize,
}

impl DocumentStore {
    /// Create a store seeded with the sample template as the active document.
    pub fn initialize() -> Self {
        tracing::debug!("store.initialize");
        Self {
            documents: vec![Document::sample()],
            active_index: 0,
        }
    }

    // --- Commands ---

    /// Append a document. The active document does not change.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] if `title` is empty.
    pub fn add_document(&mut self, title: &str, content: &str) -> Result<()> {
        if title.is_empty() {
            tracing::warn!("store.add rejected: empty title");
            return Err(StoreError::Validation { field: "title" });
        }
        self.documents.push(Document::new(title, content));
        tracing::debug!(title, len = self.documents.len(), "store.add");
        Ok(())
    }

    /// Decode `raw_bytes` as UTF-8 and append it as a document named `name`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Decode`] for invalid UTF-8, or
    /// [`StoreError::Validation`] if `name` is empty.
    pub fn upload_document(&mut self, name: &str, raw_bytes: Vec<u8>) -> Result<()> {
        let content = String::from_utf8(raw_bytes).map_err(|err| {
            tracing::warn!(name, %err, "store.upload rejected");
            StoreError::from(err)
        })?;
        self.add_document(name, &content)
    }

    /// Make the document at `index` active.
    ///
    /// # Errors
    ///
    /// [`StoreError::Index`] if `index >= len()`.
    pub fn select_document(&mut self, index: usize) -> Result<()> {
        if index >= self.documents.len() {
            return Err(StoreError::Index {
                index,
                len: self.documents.len(),
            });
        }
        self.active_index = index;
        tracing::debug!(index, "store.select");
        Ok(())
    }

    /// Remove the active document and make the first one active.
    ///
    /// # Errors
    ///
    /// [`StoreError::Precondition`] when only one document is left.
    pub fn delete_active_document(&mut self) -> Result<Document> {
        if self.documents.len() == 1 {
            tracing::warn!("store.delete rejected: last document");
            return Err(StoreError::Precondition(
                "cannot delete the last remaining document",
            ));
        }
        let removed = self.documents.remove(self.active_index);
        self.active_index = 0;
        tracing::debug!(title = removed.title(), len = self.documents.len(), "store.delete");
        Ok(removed)
    }

    /// Replace every literal occurrence of `target` in the active document.
    ///
    /// Returns how many occurrences were replaced.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] if `target` is empty.
    pub fn replace_in_active(&mut self, target: &str, replacement: &str) -> Result<usize> {
        if target.is_empty() {
            return Err(StoreError::Validation { field: "find text" });
        }
        let doc = &mut self.documents[self.active_index];
        let result = search::replace_all(doc.content(), target, replacement);
        if result.count > 0 {
            doc.set_content(result.text);
        }
        tracing::debug!(target, count = result.count, "store.replace");
        Ok(result.count)
    }

    /// Overwrite the active document's content.
    pub fn edit_active(&mut self, new_content: impl Into<String>) {
        self.documents[self.active_index].set_content(new_content.into());
    }

    // --- Queries ---

    /// All documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The document at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Titles in display order, for a selection list.
    pub fn titles(&self) -> Vec<&str> {
        self.documents.iter().map(Document::title).collect()
    }

    /// The document currently being edited. There is always one.
    pub fn active(&self) -> &Document {
        &self.documents[self.active_index]
    }

    /// Position of the active document in `documents`.
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of documents; never zero.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(contents: &[&str]) -> DocumentStore {
        let mut store = DocumentStore::initialize();
        for (i, content) in contents.iter().enumerate() {
            store.add_document(&format!("Doc {i}"), content).unwrap();
        }
        store
    }

    #[test]
    fn test_initialize_seeds_sample_document() {
        let store = DocumentStore::initialize();
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_index(), 0);
        assert_eq!(store.active().title(), SAMPLE_TITLE);
        assert!(store.active().content().contains("[Company Name]"));
    }

    #[test]
    fn test_add_document_appends_without_changing_active() {
        let mut store = DocumentStore::initialize();
        store.add_document("Follow-up", "Hi").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.active_index(), 0);
        assert_eq!(store.titles(), vec![SAMPLE_TITLE, "Follow-up"]);
    }

    #[test]
    fn test_add_document_allows_empty_content() {
        let mut store = DocumentStore::initialize();
        store.add_document("Blank", "").unwrap();
        assert_eq!(store.get(1).map(Document::content), Some(""));
    }

    #[test]
    fn test_add_document_rejects_empty_title() {
        let mut store = DocumentStore::initialize();
        let before = store.clone();
        let err = store.add_document("", "content").unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "title" }));
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_then_select_makes_new_document_active() {
        let mut store = DocumentStore::initialize();
        store.add_document("T", "C").unwrap();
        store.select_document(store.len() - 1).unwrap();
        assert_eq!(store.active().title(), "T");
        assert_eq!(store.active().content(), "C");
    }

    #[test]
    fn test_upload_document_decodes_utf8() {
        let mut store = DocumentStore::initialize();
        store
            .upload_document("notes.txt", "Grüße\n".as_bytes().to_vec())
            .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(Document::title), Some("notes.txt"));
        assert_eq!(store.get(1).map(Document::content), Some("Grüße\n"));
    }

    #[test]
    fn test_upload_invalid_utf8_fails_and_leaves_store_unchanged() {
        let mut store = DocumentStore::initialize();
        let before = store.clone();
        let err = store
            .upload_document("bad.txt", vec![0x66, 0xff, 0xfe, 0x6f])
            .unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_upload_with_empty_name_is_validation_error() {
        let mut store = DocumentStore::initialize();
        let err = store.upload_document("", b"text".to_vec()).unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_select_out_of_range_fails() {
        let mut store = store_with(&["a"]);
        store.select_document(1).unwrap();
        let err = store.select_document(2).unwrap_err();
        assert!(matches!(err, StoreError::Index { index: 2, len: 2 }));
        assert_eq!(store.active_index(), 1);
    }

    #[test]
    fn test_delete_last_document_is_forbidden() {
        let mut store = DocumentStore::initialize();
        let err = store.delete_active_document().unwrap_err();
        assert!(matches!(err, StoreError::Precondition(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_removes_active_and_resets_to_first() {
        let mut store = store_with(&["a", "b"]);
        store.select_document(2).unwrap();
        let removed = store.delete_active_document().unwrap();
        assert_eq!(removed.title(), "Doc 1");
        assert_eq!(store.len(), 2);
        assert_eq!(store.active_index(), 0);
        assert_eq!(store.titles(), vec![SAMPLE_TITLE, "Doc 0"]);
    }

    #[test]
    fn test_delete_first_document_keeps_order_of_rest() {
        let mut store = store_with(&["a", "b"]);
        store.delete_active_document().unwrap();
        assert_eq!(store.titles(), vec!["Doc 0", "Doc 1"]);
        assert_eq!(store.active().content(), "a");
    }

    #[test]
    fn test_replace_in_active_counts_and_rewrites() {
        let mut store = DocumentStore::initialize();
        store.edit_active("aaa");
        assert_eq!(store.replace_in_active("a", "bb").unwrap(), 3);
        assert_eq!(store.active().content(), "bbbbbb");
    }

    #[test]
    fn test_replace_in_active_without_match_is_noop() {
        let mut store = DocumentStore::initialize();
        let before = store.active().content().to_string();
        assert_eq!(store.replace_in_active("zz", "y").unwrap(), 0);
        assert_eq!(store.active().content(), before);
    }

    #[test]
    fn test_replace_in_active_rejects_empty_target() {
        let mut store = DocumentStore::initialize();
        let before = store.clone();
        let err = store.replace_in_active("", "x").unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
        assert_eq!(store, before);
    }

    #[test]
    fn test_replace_only_touches_active_document() {
        let mut store = store_with(&["name name"]);
        store.select_document(1).unwrap();
        assert_eq!(store.replace_in_active("name", "Ada").unwrap(), 2);
        assert_eq!(store.active().content(), "Ada Ada");
        assert!(store.get(0).unwrap().content().contains("[Hiring Manager's Name]"));
    }

    #[test]
    fn test_replace_fills_sample_placeholders() {
        let mut store = DocumentStore::initialize();
        let count = store.replace_in_active("[Company Name]", "Acme").unwrap();
        assert_eq!(count, 1);
        assert!(store.active().content().contains("position at Acme,"));
    }

    #[test]
    fn test_edit_active_is_idempotent() {
        let mut store = DocumentStore::initialize();
        store.edit_active("hello");
        let once = store.clone();
        store.edit_active("hello");
        assert_eq!(store, once);
        assert_eq!(store.active().content(), "hello");
    }
}
