//! # DXI - Duplicate Text Indexer
//!
//! DXI discovers the longest shared substring between every pair of
//! documents in a collection, using a character-level suffix array plus
//! LCP index over a single concatenated text.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`text`] - UTF-8 text with O(1) character access ([`CharText`])
//! - [`index`] - Document store, suffix index, and match extraction
//! - [`error`] - Crate-wide error type
//!
//! All offsets and lengths across the pipeline are measured in Unicode
//! scalar characters, never in bytes.
//!
//! ## Quick Start
//!
//! ```
//! use dxi::{find_duplicates, Match};
//!
//! let docs = [
//!     (1i64, "The quick brown fox"),
//!     (2, "The slow brown cat"),
//! ];
//!
//! // One match per document pair: the longest shared substring and where
//! // it starts in each document.
//! let matches = find_duplicates(docs, 4).unwrap();
//! assert_eq!(
//!     matches,
//!     vec![Match { doc1_id: 1, doc2_id: 2, start_pos1: 9, start_pos2: 8, length: 7 }]
//! );
//! ```
//!
//! For finer control, drive the components directly: fill a
//! [`DocumentStore`], then hand it to a [`DuplicateFinder`]. Duplicate
//! document IDs are dropped by the store; texts that are not valid UTF-8
//! are rejected at [`CharText`] construction.

pub mod error;
pub mod index;
pub mod text;

pub use error::{Error, Result};
pub use index::{
    find_duplicates, matches_to_json, DocId, DocumentPosition, DocumentStore, DuplicateFinder,
    Match, SuffixIndex,
};
pub use text::{Char, CharText};
