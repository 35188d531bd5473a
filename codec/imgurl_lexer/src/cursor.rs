//! Copyable byte cursor over a lowercased URL buffer.
//!
//! The cursor advances byte-by-byte. Reads past the end return `0x00`, so
//! scanning loops terminate on the first out-of-range read without a
//! separate bounds check. A `0x00` inside the input is an ordinary
//! unrecognised byte; use [`Cursor::is_eof`] to tell the two apart.

/// Byte cursor over a source string.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a state-machine step can take one by value
/// and hand back the advanced copy.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.src.len()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Byte at an absolute offset, `0x00` when out of range.
    #[inline]
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.src.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte immediately before the current position, `None` at offset 0.
    #[inline]
    pub fn previous(&self) -> Option<u8> {
        self.pos.checked_sub(1).map(|p| self.byte_at(p))
    }

    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` bytes, clamped to the end of the source.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Returns the number of bytes consumed. Stops at EOF because the
    /// out-of-range byte `0x00` never satisfies the predicates used here.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// The remaining input from the current position.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or("")
    }

    /// Source text between two offsets.
    ///
    /// Returns `""` if the range does not fall on character boundaries.
    /// The tokenizer only slices runs of ASCII bytes, which always do.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.src.get(start..end).unwrap_or("")
    }
}
