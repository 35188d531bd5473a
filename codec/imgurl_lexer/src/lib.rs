//! Tokenizer for image transformation URL paths.
//!
//! Turns a path such as `//host/12345/v1/fill/w_100,h_300,al_l/cat.jpg` into
//! a stream of [`Token`]s, one [`Tokenizer::next_token`] call at a time.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: owns the ASCII-lowercased copy of the input.
//! - [`Cursor`]: a `Copy` byte cursor over that buffer.
//! - [`transition`]: the pure state-machine step `(state, cursor) -> (state, token?, cursor)`.
//! - [`Tokenizer`]: threads the state through repeated transitions.
//!
//! The tokenizer never fails. Input it does not understand is skipped, and
//! every scan ends at [`TokenKind::Eof`]. Deciding whether a token sequence
//! is meaningful is the parser's job.

mod cursor;
mod keywords;
mod source_buffer;
mod token;
mod tokenizer;

pub use cursor::Cursor;
pub use keywords::{is_keyword, COMPOUND_PARAMS, KEYWORDS};
pub use source_buffer::SourceBuffer;
pub use token::{LexState, Span, Token, TokenKind};
pub use tokenizer::{transition, Tokenizer, Transition};
