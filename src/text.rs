//! Character-indexed UTF-8 text.
//!
//! [`CharText`] wraps a validated UTF-8 byte buffer together with a table of
//! character start offsets, giving O(1) access to the i-th Unicode scalar and
//! an O(1) character count. Every offset used by the indexing pipeline is a
//! character index into one of these texts, never a byte offset.

use crate::error::{Error, Result};
use std::fmt;

/// A single Unicode scalar, viewed as the byte slice of its UTF-8 encoding.
///
/// Equality and ordering are byte-lexicographic, which for valid UTF-8
/// coincides with code-point order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Char<'a>(&'a [u8]);

impl<'a> Char<'a> {
    /// UTF-8 bytes of this character.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// This character as a string slice.
    pub fn as_str(&self) -> &'a str {
        // Validated at CharText construction; a char_pos-delimited slice is
        // always one complete scalar.
        unsafe { std::str::from_utf8_unchecked(self.0) }
    }
}

impl fmt::Display for Char<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UTF-8 text with O(1) character access.
///
/// Owns its byte buffer plus a `char_pos` table with one entry per character
/// and a final entry equal to the total byte length. Immutable except for
/// [`CharText::push_text`], which appends whole validated texts and rebases
/// the appended offsets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharText {
    bytes: Vec<u8>,
    /// Byte offset of each character's leading byte; `char_pos[len()]` is
    /// the total byte length.
    char_pos: Vec<usize>,
}

impl Default for CharText {
    fn default() -> Self {
        Self {
            bytes: Vec::new(),
            char_pos: vec![0],
        }
    }
}

impl CharText {
    /// Parse a byte sequence into a character-indexed text.
    ///
    /// Validation is strict: lead bytes `0xC0`/`0xC1` and `0xF5..=0xFF`,
    /// stray continuation bytes, truncated sequences, malformed continuation
    /// bytes, overlong encodings, surrogate code points, and values above
    /// U+10FFFF are all rejected with [`Error::InvalidUtf8`].
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        let char_pos = index_utf8(&bytes)?;
        Ok(Self { bytes, char_pos })
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.char_pos.len() - 1
    }

    /// True if the text has no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the underlying byte buffer.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// The underlying UTF-8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The text as a string slice.
    pub fn as_str(&self) -> &str {
        // Bytes are validated on construction and only ever extended with
        // other validated texts.
        unsafe { std::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Character at `index`, or [`Error::OutOfRange`].
    pub fn char_at(&self, index: usize) -> Result<Char<'_>> {
        if index >= self.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(Char(self.char_bytes(index)))
    }

    /// Byte slice of the `index`-th character. Hot-path accessor for the
    /// suffix index; `index` must be in range.
    pub(crate) fn char_bytes(&self, index: usize) -> &[u8] {
        debug_assert!(index < self.len());
        &self.bytes[self.char_pos[index]..self.char_pos[index + 1]]
    }

    /// Iterator over the characters of the text.
    pub fn chars(&self) -> impl Iterator<Item = Char<'_>> {
        (0..self.len()).map(move |i| Char(self.char_bytes(i)))
    }

    /// Owned substring of `len` characters starting at character `start`.
    ///
    /// Both endpoints are measured in characters; an endpoint past the end of
    /// the text is [`Error::OutOfRange`].
    pub fn substr(&self, start: usize, len: usize) -> Result<CharText> {
        let n = self.len();
        let end = match start.checked_add(len) {
            Some(end) if start <= n && end <= n => end,
            _ => {
                return Err(Error::OutOfRange {
                    index: start.max(start.saturating_add(len)),
                    len: n,
                })
            }
        };
        let lo = self.char_pos[start];
        let hi = self.char_pos[end];
        Ok(CharText {
            bytes: self.bytes[lo..hi].to_vec(),
            char_pos: self.char_pos[start..=end].iter().map(|&p| p - lo).collect(),
        })
    }

    /// Append another text in place, rebasing its offset table.
    pub fn push_text(&mut self, other: &CharText) {
        let base = self.bytes.len();
        self.bytes.extend_from_slice(&other.bytes);
        // Drop our terminal entry; the appended table (terminal included)
        // continues the offsets from `base`.
        self.char_pos.pop();
        self.char_pos.extend(other.char_pos.iter().map(|&p| p + base));
    }

    /// Concatenation producing a new text.
    pub fn concat(&self, other: &CharText) -> CharText {
        let mut out = self.clone();
        out.push_text(other);
        out
    }
}

impl From<&str> for CharText {
    fn from(s: &str) -> Self {
        // Already valid UTF-8; index without re-validating.
        let mut char_pos: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
        char_pos.push(s.len());
        Self {
            bytes: s.as_bytes().to_vec(),
            char_pos,
        }
    }
}

impl From<String> for CharText {
    fn from(s: String) -> Self {
        CharText::from(s.as_str())
    }
}

impl fmt::Display for CharText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate `bytes` as UTF-8 and return the character offset table.
///
/// The table has one entry per character plus a terminal entry equal to
/// `bytes.len()`.
fn index_utf8(bytes: &[u8]) -> Result<Vec<usize>> {
    let mut char_pos = Vec::with_capacity(bytes.len() + 1);
    let n = bytes.len();
    let mut i = 0;
    while i < n {
        let lead = bytes[i];
        let width = match lead {
            0x00..=0x7F => 1,
            // 0xC0 and 0xC1 would encode U+0000..U+007F in two bytes
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            // stray continuations, overlong two-byte leads, and leads past
            // the U+10FFFF ceiling (0xF5..=0xFF)
            _ => return Err(Error::InvalidUtf8 { offset: i }),
        };
        if i + width > n {
            return Err(Error::InvalidUtf8 { offset: i });
        }
        if width > 1 {
            // The second byte carries the overlong / surrogate / ceiling
            // restrictions; the rest are plain 10xxxxxx continuations.
            let second_ok = match lead {
                0xE0 => (0xA0..=0xBF).contains(&bytes[i + 1]),
                0xED => (0x80..=0x9F).contains(&bytes[i + 1]),
                0xF0 => (0x90..=0xBF).contains(&bytes[i + 1]),
                0xF4 => (0x80..=0x8F).contains(&bytes[i + 1]),
                _ => bytes[i + 1] & 0xC0 == 0x80,
            };
            if !second_ok {
                return Err(Error::InvalidUtf8 { offset: i });
            }
            for k in 2..width {
                if bytes[i + k] & 0xC0 != 0x80 {
                    return Err(Error::InvalidUtf8 { offset: i });
                }
            }
        }
        char_pos.push(i);
        i += width;
    }
    char_pos.push(n);
    Ok(char_pos)
}
