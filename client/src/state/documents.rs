//! Uploaded-document list shared by the homepage picker and the upload page.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::types::DocumentSummary;

/// Cached document listing. `loaded` flips once the first fetch completes.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub items: Vec<DocumentSummary>,
    pub loaded: bool,
}

impl DocumentsState {
    /// Replace the listing with a fresh server response.
    pub fn replace(&mut self, items: Vec<DocumentSummary>) {
        self.items = items;
        self.loaded = true;
    }

    /// Insert a freshly uploaded document at the head of the list, dropping
    /// any stale entry with the same id.
    pub fn prepend(&mut self, doc: DocumentSummary) {
        self.items.retain(|d| d.id != doc.id);
        self.items.insert(0, doc);
    }

    /// Forget the listing; the next page mount refetches.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&DocumentSummary> {
        self.items.iter().find(|d| d.id == id)
    }
}
