//! Duplicate extraction
//!
//! Walks adjacent suffix-array pairs, resolves both positions to their
//! source documents, clamps the shared prefix at document boundaries, and
//! reduces to the single longest match per unordered document pair.

use crate::error::Result;
use crate::index::store::DocumentStore;
use crate::index::suffix::SuffixIndex;
use crate::index::types::{DocId, Match};
use crate::text::CharText;
use ahash::AHashMap;
use tracing::debug;

/// Finds the longest shared substring between every pair of documents
///
/// Owns the [`SuffixIndex`] it builds over the store's concatenated text;
/// extraction itself is a pure function of the index and the store.
#[derive(Debug, Default)]
pub struct DuplicateFinder {
    index: SuffixIndex,
}

impl DuplicateFinder {
    /// Create a finder with an unbuilt index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find duplicates between the store's documents.
    ///
    /// Returns one [`Match`] per unordered document pair that shares a
    /// substring of at least `min_length` characters: the longest such
    /// substring, with start offsets relative to each document. The result
    /// is sorted by length descending, then by document IDs.
    pub fn find_duplicates(
        &mut self,
        store: &DocumentStore,
        min_length: usize,
    ) -> Result<Vec<Match>> {
        let text = store.concatenated();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        self.index.build(text)?;
        let sa = self.index.suffix_array()?;
        let lcp = self.index.lcp_array()?;

        // Best match seen so far per (lower id, higher id) pair.
        let mut best: AHashMap<(DocId, DocId), Match> = AHashMap::new();

        for (i, &common) in lcp.iter().enumerate() {
            let a = sa[i];
            let b = sa[i + 1];

            // A correct store resolves every position; skip rather than
            // fail if one ever falls outside.
            let (da, db) = match (store.locate(a), store.locate(b)) {
                (Ok(da), Ok(db)) => (da, db),
                _ => continue,
            };

            // Repeats within one document are not duplicates.
            if da.id == db.id {
                continue;
            }

            let pos_a = a - da.start;
            let pos_b = b - db.start;

            // Clamp at the document ends. The separator never occurs inside
            // a document, so truncating here is equivalent to cutting the
            // common prefix at the first separator character.
            let length = common
                .min(da.length.saturating_sub(pos_a))
                .min(db.length.saturating_sub(pos_b));
            if length < min_length {
                continue;
            }

            let candidate = if da.id < db.id {
                Match {
                    doc1_id: da.id,
                    doc2_id: db.id,
                    start_pos1: pos_a,
                    start_pos2: pos_b,
                    length,
                }
            } else {
                Match {
                    doc1_id: db.id,
                    doc2_id: da.id,
                    start_pos1: pos_b,
                    start_pos2: pos_a,
                    length,
                }
            };

            best.entry((candidate.doc1_id, candidate.doc2_id))
                .and_modify(|current| {
                    if candidate.length > current.length {
                        *current = candidate;
                    }
                })
                .or_insert(candidate);
        }

        let mut matches: Vec<Match> = best.into_values().collect();
        matches.sort_unstable();
        debug!(pairs = matches.len(), min_length, "duplicate extraction complete");

        Ok(matches)
    }
}

/// Run the full pipeline over `(id, text)` pairs.
///
/// Builds a store with the default separator, indexes the concatenation,
/// and extracts the per-pair longest matches. Duplicate IDs are dropped
/// silently; invalid UTF-8 aborts with [`Error::InvalidUtf8`] so the caller
/// can drop the offending document and retry.
///
/// [`Error::InvalidUtf8`]: crate::Error::InvalidUtf8
pub fn find_duplicates<I, T>(docs: I, min_length: usize) -> Result<Vec<Match>>
where
    I: IntoIterator<Item = (DocId, T)>,
    T: AsRef<[u8]>,
{
    let mut store = DocumentStore::new();
    for (id, bytes) in docs {
        let content = CharText::new(bytes.as_ref().to_vec())?;
        store.add(&content, id);
    }
    DuplicateFinder::new().find_duplicates(&store, min_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(docs: &[(DocId, &str)]) -> DocumentStore {
        let mut store = DocumentStore::new();
        for &(id, text) in docs {
            assert!(store.add(&CharText::from(text), id));
        }
        store
    }

    #[test]
    fn test_empty_store() {
        let store = DocumentStore::new();
        let matches = DuplicateFinder::new().find_duplicates(&store, 5).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_single_document() {
        let store = store_of(&[(1, "Test document")]);
        let matches = DuplicateFinder::new().find_duplicates(&store, 1).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_no_shared_substring() {
        let store = store_of(&[(1, "First document"), (2, "Second text")]);
        let matches = DuplicateFinder::new().find_duplicates(&store, 5).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_simple_match() {
        let store = store_of(&[(1, "hello world"), (2, "Say hello world")]);
        let matches = DuplicateFinder::new().find_duplicates(&store, 5).unwrap();
        assert_eq!(
            matches,
            vec![Match {
                doc1_id: 1,
                doc2_id: 2,
                start_pos1: 0,
                start_pos2: 4,
                length: 11
            }]
        );
    }

    #[test]
    fn test_best_match_per_pair() {
        // Shares both "The " (4) and " brown " (7); only the longer wins.
        let store = store_of(&[(1, "The quick brown fox"), (2, "The slow brown cat")]);
        let matches = DuplicateFinder::new().find_duplicates(&store, 4).unwrap();
        assert_eq!(
            matches,
            vec![Match {
                doc1_id: 1,
                doc2_id: 2,
                start_pos1: 9,
                start_pos2: 8,
                length: 7
            }]
        );
    }

    #[test]
    fn test_canonical_id_order() {
        // Insertion order must not leak into the reported id order.
        let store = store_of(&[(9, "shared phrase here"), (3, "a shared phrase too")]);
        let matches = DuplicateFinder::new().find_duplicates(&store, 6).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].doc1_id, 3);
        assert_eq!(matches[0].doc2_id, 9);
    }

    #[test]
    fn test_pipeline_function() {
        let matches =
            find_duplicates([(1i64, "hello world"), (2, "Say hello world")], 5).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].length, 11);
    }

    #[test]
    fn test_pipeline_rejects_invalid_utf8() {
        let docs: Vec<(DocId, Vec<u8>)> = vec![(1, b"fine".to_vec()), (2, vec![0xFF, 0x20])];
        assert!(find_duplicates(docs, 1).is_err());
    }

    #[test]
    fn test_pipeline_drops_duplicate_ids() {
        let matches = find_duplicates([(1i64, "same text"), (1, "same text")], 1).unwrap();
        assert!(matches.is_empty());
    }
}
