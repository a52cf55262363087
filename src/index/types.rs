//! Types for the duplicate-detection index.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Unique identifier for a document, assigned by the caller
pub type DocId = i64;

/// Default document separator appended after every document
pub const DEFAULT_SEPARATOR: &str = "$";

/// A document's position within the concatenated text
///
/// `start` is the character offset of the document's first character and
/// `length` its character count, separator excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentPosition {
    /// Caller-assigned document ID
    pub id: DocId,
    /// Start position in the concatenated text (characters)
    pub start: usize,
    /// Document length in characters, separator excluded
    pub length: usize,
}

/// The longest shared substring found between one pair of documents
///
/// Start positions are character offsets relative to each document's own
/// start; `length` is a character count. `doc1_id < doc2_id` always holds
/// for emitted matches. Serializes to the conventional JSON shape with the
/// `doc1_id`/`doc2_id`/`start_pos1`/`start_pos2`/`length` field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub doc1_id: DocId,
    pub doc2_id: DocId,
    pub start_pos1: usize,
    pub start_pos2: usize,
    pub length: usize,
}

impl Ord for Match {
    /// Output order: length descending, then document IDs ascending.
    /// Start positions participate only as final tiebreakers so the order
    /// stays total and consistent with equality.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .length
            .cmp(&self.length)
            .then_with(|| self.doc1_id.cmp(&other.doc1_id))
            .then_with(|| self.doc2_id.cmp(&other.doc2_id))
            .then_with(|| self.start_pos1.cmp(&other.start_pos1))
            .then_with(|| self.start_pos2.cmp(&other.start_pos2))
    }
}

impl PartialOrd for Match {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Render matches as the conventional JSON array.
pub fn matches_to_json(matches: &[Match]) -> Result<String> {
    Ok(serde_json::to_string(matches)?)
}
