//! Token and lexer-state types.

use std::fmt;

/// Byte range into the tokenized URL (end exclusive).
///
/// Offsets are valid for both the lowercased buffer and the original input,
/// since ASCII lowercasing never changes byte lengths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Lexical state carried between tokens.
///
/// `Initial` is the state on construction and after any byte the machine
/// does not recognise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexState {
    #[default]
    Initial,
    /// Just read an operation keyword; its `/` separator is still ahead.
    AfterKeyword,
    /// Just read a `,`; a parameter code is expected next.
    BeforeParam,
    /// Just read a `_`; a value component is expected next.
    BeforeValue,
}

/// What a token is. Text payloads borrow from the lowercased buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind<'a> {
    /// One of the operation keywords (`canvas`, `fill`, `fit`, `crop`).
    Keyword(&'a str),
    /// A parameter code such as `w`, `us` or `auto_adj`.
    Param(&'a str),
    /// One value component (numeric or alphabetic literal).
    Value(&'a str),
    /// The reserved literal `auto` in a value position.
    AutoValue,
    /// A `_` separator between a code and a value, or between value parts.
    Underscore,
    /// End of input. Returned forever once reached.
    Eof,
}

impl TokenKind<'_> {
    /// Short name used in trace output and test failure messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Param(_) => "param",
            TokenKind::Value(_) => "value",
            TokenKind::AutoValue => "auto",
            TokenKind::Underscore => "underscore",
            TokenKind::Eof => "eof",
        }
    }
}

/// A token with its location in the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub const fn new(kind: TokenKind<'a>, start: usize, end: usize) -> Self {
        Token {
            kind,
            span: Span::new(start, end),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
