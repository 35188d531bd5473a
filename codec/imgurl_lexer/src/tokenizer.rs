//! The tokenizer state machine.
//!
//! # Design
//!
//! [`transition`] is a pure function: given the current [`LexState`] and a
//! [`Cursor`], it inspects the byte (or byte run) at the cursor and returns
//! the next state, at most one token, and the advanced cursor. [`Tokenizer`]
//! only threads those values through a loop until a token comes out.
//!
//! Dispatch on the current byte, in priority order:
//!
//! | byte          | condition                          | effect                              |
//! |---------------|------------------------------------|-------------------------------------|
//! | `,`           | always                             | state `BeforeParam`                 |
//! | `/`           | `AfterKeyword`, first of a run     | skipped                             |
//! | space         | `AfterKeyword` / `BeforeParam`     | skipped                             |
//! | letter        | see [`letter_run`]                 | `Keyword` / `Param` / value / skip  |
//! | `_`           | always                             | `Underscore`, state `BeforeValue`   |
//! | digit `.` `-` | `BeforeValue`                      | `Value`                             |
//! | anything else |                                    | skipped, state `Initial`            |
//!
//! A parameter code moves the machine to `BeforeParam`, so the `/` that
//! closes the parameter block always falls through to the default arm and
//! resets to `Initial`. So does the second `/` of an empty block (`fit//`).
//!
//! Every arm consumes at least one byte, so scanning always terminates.

use crate::keywords::{compound_param_at, is_keyword};
use crate::{Cursor, LexState, Token, TokenKind};

/// Result of one state-machine step.
#[derive(Clone, Copy, Debug)]
pub struct Transition<'a> {
    pub state: LexState,
    pub token: Option<Token<'a>>,
    pub cursor: Cursor<'a>,
}

impl<'a> Transition<'a> {
    #[inline]
    fn skip(state: LexState, cursor: Cursor<'a>) -> Self {
        Transition {
            state,
            token: None,
            cursor,
        }
    }

    #[inline]
    fn emit(state: LexState, token: Token<'a>, cursor: Cursor<'a>) -> Self {
        Transition {
            state,
            token: Some(token),
            cursor,
        }
    }
}

#[inline]
fn is_value_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'-'
}

/// Advance the machine by one step.
///
/// At EOF the state and cursor are returned unchanged together with an
/// `Eof` token, so repeated calls keep yielding `Eof`.
pub fn transition(state: LexState, cursor: Cursor<'_>) -> Transition<'_> {
    let mut next = cursor;
    let start = cursor.pos();
    if cursor.is_eof() {
        return Transition::emit(state, Token::new(TokenKind::Eof, start, start), cursor);
    }

    match cursor.current() {
        b',' => {
            next.advance();
            Transition::skip(LexState::BeforeParam, next)
        }
        b'/' if state == LexState::AfterKeyword && cursor.previous() != Some(b'/') => {
            next.advance();
            Transition::skip(state, next)
        }
        b' ' if matches!(state, LexState::AfterKeyword | LexState::BeforeParam) => {
            next.advance();
            Transition::skip(state, next)
        }
        b'a'..=b'z' => letter_run(state, cursor),
        b'_' => {
            next.advance();
            let token = Token::new(TokenKind::Underscore, start, next.pos());
            Transition::emit(LexState::BeforeValue, token, next)
        }
        b'0'..=b'9' | b'.' | b'-' if state == LexState::BeforeValue => value_run(state, cursor),
        _ => {
            next.advance();
            Transition::skip(LexState::Initial, next)
        }
    }
}

/// Classify a maximal run of letters starting at the cursor.
///
/// 1. A whole path segment spelling an operation keyword is a `Keyword`.
/// 2. In a parameter position, a compound code (`auto_adj`) is one `Param`.
/// 3. Right after a keyword, `auto` is an `AutoValue`.
/// 4. In a parameter position, a run followed by `_`, `,` or `/` is a `Param`.
/// 5. In a value position, the run starts a value (see [`value_run`]).
/// 6. Otherwise the run is skipped without changing state.
fn letter_run(state: LexState, cursor: Cursor<'_>) -> Transition<'_> {
    let start = cursor.pos();
    let mut next = cursor;
    next.eat_while(|b| b.is_ascii_lowercase());
    let text = cursor.slice(start, next.pos());
    let follow = next.current();

    let segment_start = matches!(cursor.previous(), None | Some(b'/'));
    if is_keyword(text) && segment_start && follow == b'/' {
        let token = Token::new(TokenKind::Keyword(text), start, next.pos());
        return Transition::emit(LexState::AfterKeyword, token, next);
    }

    let param_position = matches!(state, LexState::AfterKeyword | LexState::BeforeParam);
    if param_position {
        if let Some(code) = compound_param_at(cursor.rest()) {
            let mut after = cursor;
            after.advance_n(code.len());
            let token = Token::new(TokenKind::Param(code), start, after.pos());
            return Transition::emit(LexState::BeforeParam, token, after);
        }
    }

    if state == LexState::AfterKeyword && text == "auto" {
        let token = Token::new(TokenKind::AutoValue, start, next.pos());
        return Transition::emit(state, token, next);
    }

    if param_position && matches!(follow, b'_' | b',' | b'/') {
        let token = Token::new(TokenKind::Param(text), start, next.pos());
        return Transition::emit(LexState::BeforeParam, token, next);
    }

    if state == LexState::BeforeValue {
        return value_run(state, cursor);
    }

    Transition::skip(state, next)
}

/// Scan a value component: the maximal run of letters, digits, `.` and `-`.
///
/// Mixed runs such as `ff0000` or `-0.5` stay one component. Sign and
/// decimal-point placement is not validated. A run spelling exactly `auto`
/// is the reserved `AutoValue`.
fn value_run(state: LexState, cursor: Cursor<'_>) -> Transition<'_> {
    let start = cursor.pos();
    let mut next = cursor;
    next.eat_while(is_value_byte);
    let text = cursor.slice(start, next.pos());
    let kind = if text == "auto" {
        TokenKind::AutoValue
    } else {
        TokenKind::Value(text)
    };
    Transition::emit(state, Token::new(kind, start, next.pos()), next)
}

/// Pull-based tokenizer over a [`SourceBuffer`](crate::SourceBuffer).
///
/// Produces one token per [`next_token`](Self::next_token) call. After the
/// first `Eof`, every further call returns `Eof` again.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    state: LexState,
}

impl<'a> Tokenizer<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Tokenizer {
            cursor,
            state: LexState::Initial,
        }
    }

    #[inline]
    pub fn state(&self) -> LexState {
        self.state
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            let step = transition(self.state, self.cursor);
            self.state = step.state;
            self.cursor = step.cursor;
            if let Some(token) = step.token {
                return token;
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
