//! Lowercased source buffer.
//!
//! URL paths are case-insensitive for codes and keywords, so the whole
//! input is lowercased once up front. Only ASCII is folded: byte offsets in
//! the buffer are then identical to offsets in the caller's original string,
//! which lets the parser slice endpoint and image name out of the original
//! (case-preserving) URL using token spans.

use crate::{Cursor, Tokenizer};

/// Owned, ASCII-lowercased copy of a URL path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    pub fn new(source: &str) -> Self {
        SourceBuffer {
            text: source.to_ascii_lowercase(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// A cursor at the start of the buffer.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text)
    }

    /// A tokenizer in the `Initial` state at the start of the buffer.
    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(self.cursor())
    }
}
