//! Document store
//!
//! Accumulates documents into a single concatenated [`CharText`], appending a
//! separator character after every document, and maps any character offset in
//! the concatenated text back to the document that owns it.

use crate::error::{Error, Result};
use crate::index::types::{DocId, DocumentPosition, DEFAULT_SEPARATOR};
use crate::text::CharText;
use std::collections::BTreeMap;

/// Store for documents and their positions in the concatenated text
///
/// The caller must guarantee that the separator character does not occur in
/// any document; the trailing separator after each document is what keeps
/// common prefixes from spanning document boundaries.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Single-character document separator
    sep: CharText,
    /// All documents concatenated, a separator after each
    text: CharText,
    /// Positions keyed by document ID, for duplicate rejection
    by_id: BTreeMap<DocId, DocumentPosition>,
    /// Positions ordered by start offset, for offset-to-document lookup
    by_pos: Vec<DocumentPosition>,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Create a store with the default `"$"` separator.
    pub fn new() -> Self {
        Self {
            sep: CharText::from(DEFAULT_SEPARATOR),
            text: CharText::default(),
            by_id: BTreeMap::new(),
            by_pos: Vec::new(),
        }
    }

    /// Create a store with a custom separator.
    ///
    /// The separator must be exactly one character; anything else is
    /// [`Error::InvalidSeparator`].
    pub fn with_separator(sep: CharText) -> Result<Self> {
        if sep.len() != 1 {
            return Err(Error::InvalidSeparator { chars: sep.len() });
        }
        Ok(Self {
            sep,
            text: CharText::default(),
            by_id: BTreeMap::new(),
            by_pos: Vec::new(),
        })
    }

    /// The separator character.
    pub fn separator(&self) -> &CharText {
        &self.sep
    }

    /// Add a document to the store.
    ///
    /// Returns `false` (not an error) if `id` is already present; the store
    /// is unchanged in that case. Otherwise the content and a trailing
    /// separator are appended to the concatenated text.
    pub fn add(&mut self, content: &CharText, id: DocId) -> bool {
        if self.by_id.contains_key(&id) {
            return false;
        }

        let doc = DocumentPosition {
            id,
            start: self.text.len(),
            length: content.len(),
        };
        self.by_id.insert(id, doc);
        // Documents only ever append, so by_pos stays ascending in start.
        self.by_pos.push(doc);

        self.text.push_text(content);
        self.text.push_text(&self.sep);

        true
    }

    /// The concatenated text of all documents.
    pub fn concatenated(&self) -> &CharText {
        &self.text
    }

    /// Number of documents in the store.
    pub fn doc_count(&self) -> usize {
        self.by_pos.len()
    }

    /// True if no documents have been added.
    pub fn is_empty(&self) -> bool {
        self.by_pos.is_empty()
    }

    /// Document positions in concatenation order.
    pub fn positions(&self) -> &[DocumentPosition] {
        &self.by_pos
    }

    /// Position record for a document ID, if present.
    pub fn get(&self, id: DocId) -> Option<DocumentPosition> {
        self.by_id.get(&id).copied()
    }

    /// Find the document containing character offset `pos`.
    ///
    /// Each document's range covers its content plus its trailing separator,
    /// so every offset in `[0, concatenated().len())` resolves to exactly one
    /// document. Offsets outside that range are [`Error::OutOfRange`].
    pub fn locate(&self, pos: usize) -> Result<DocumentPosition> {
        // Upper-bound search on start, then step one back.
        let idx = self.by_pos.partition_point(|doc| doc.start <= pos);
        if idx == 0 {
            return Err(Error::OutOfRange {
                index: pos,
                len: self.text.len(),
            });
        }

        let doc = self.by_pos[idx - 1];
        let end = doc.start + doc.length + self.sep.len();
        if pos < end {
            Ok(doc)
        } else {
            // Past the last document's trailing separator.
            Err(Error::OutOfRange {
                index: pos,
                len: self.text.len(),
            })
        }
    }
}
