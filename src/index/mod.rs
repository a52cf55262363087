//! Duplicate-detection index.
//!
//! This module provides the indexing pipeline:
//!
//! - [`store`] - Document concatenation and position mapping
//! - [`suffix`] - Suffix array + LCP construction
//! - [`extract`] - Pairwise longest-match extraction
//! - [`types`] - Data structures ([`DocumentPosition`], [`Match`], type aliases)
//!
//! ## Data flow
//!
//! Documents feed into a [`DocumentStore`], which concatenates them with a
//! separator character after each. A [`SuffixIndex`] is built once over the
//! concatenated text; the [`DuplicateFinder`] walks adjacent suffix-array
//! pairs against the LCP array and keeps the longest match per document
//! pair. All offsets are character indices.
//!
//! ## Usage
//!
//! ```
//! use dxi::index::find_duplicates;
//!
//! let matches = find_duplicates([(1i64, "hello world"), (2, "Say hello world")], 5).unwrap();
//! assert_eq!(matches[0].length, 11);
//! ```

pub mod extract;
pub mod store;
pub mod suffix;
pub mod types;

// Re-exports for public API
pub use extract::{find_duplicates, DuplicateFinder};
pub use store::DocumentStore;
pub use suffix::SuffixIndex;
pub use types::{matches_to_json, DocId, DocumentPosition, Match, DEFAULT_SEPARATOR};
