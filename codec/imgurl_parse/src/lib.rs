//! Parser for image transformation URLs.
//!
//! Consumes the token stream of an [`imgurl_lexer::Tokenizer`] in a single
//! forward pass and builds an [`imgurl_ir::Descriptor`].
//!
//! # Algorithm
//!
//! - `Keyword`: selects the active [`GrammarTable`]. The offset of the first
//!   keyword splits the URL: everything before it is
//!   `<endpoint>/<image_id>/<version>`.
//! - `Param`: looked up in the active table. Flags are recorded at once;
//!   other codes open a pending entry that waits for `arity` values.
//! - `Value` / `AutoValue`: fill the pending entry. It is committed, joined
//!   with `_`, into the bucket its rule names.
//! - The image name is whatever follows the last token the parameter block
//!   consumed, after its closing `/`. Tokens past that `/` are ignored
//!   unless a new operation keyword starts there, so commas and underscores
//!   in a name never reach the grammar.
//!
//! The parser is tolerant where the grammar is silent: values with no
//! pending parameter are ignored, an entry left incomplete by the next code
//! or by EOF is dropped, and a second operation keyword replaces the first
//! (its parameters replace the earlier operation parameters; adjustments and
//! filters keep accumulating).

mod error;
pub mod grammar;

pub use error::{GrammarError, ParseError};
pub use grammar::{Grammar, GrammarTable, ParamSet, ParameterRule};

use imgurl_ir::{Bucket, Descriptor, OperationKind};
use imgurl_lexer::{SourceBuffer, TokenKind};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Parse `url` with the built-in grammar.
pub fn parse(url: &str) -> Result<Descriptor, ParseError> {
    Parser::new().parse(url)
}

/// Parser bound to a grammar.
///
/// Holds no per-URL state, so one parser can be shared across threads and
/// reused for any number of URLs.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
}

impl Parser<'static> {
    pub fn new() -> Self {
        Parser {
            grammar: grammar::standard(),
        }
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// A parameter waiting for its value components.
struct Pending<'a> {
    code: &'a str,
    remaining: usize,
    allows_auto: bool,
    bucket: Bucket,
    parts: SmallVec<[&'a str; 3]>,
}

impl<'a> Pending<'a> {
    fn new(code: &'a str, rule: &ParameterRule) -> Self {
        Pending {
            code,
            remaining: rule.arity,
            allows_auto: rule.allows_auto,
            bucket: rule.bucket,
            parts: SmallVec::new(),
        }
    }
}

fn drop_incomplete(pending: Option<Pending<'_>>) {
    if let Some(p) = pending {
        debug!(
            code = p.code,
            missing = p.remaining,
            "dropping parameter with incomplete value"
        );
    }
}

impl<'g> Parser<'g> {
    pub fn with_grammar(grammar: &'g Grammar) -> Self {
        Parser { grammar }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Parse one URL into a descriptor.
    pub fn parse(&self, url: &str) -> Result<Descriptor, ParseError> {
        let buf = SourceBuffer::new(url);
        let mut tokens = buf.tokenizer();

        let mut descriptor: Option<Descriptor> = None;
        let mut block_end: Option<usize> = None;
        let mut last = 0;
        let mut pending: Option<Pending<'_>> = None;

        loop {
            let token = tokens.next_token();
            trace!(kind = token.kind.name(), span = %token.span, "token");
            let closed = block_end.is_some_and(|end| token.span.start > end);
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Keyword(keyword) => {
                    let operation = OperationKind::from_keyword(keyword)
                        .ok_or_else(|| ParseError::UnknownOperation(keyword.to_owned()))?;
                    drop_incomplete(pending.take());
                    match descriptor.as_mut() {
                        Some(d) => {
                            debug!(
                                previous = %d.operation,
                                next = %operation,
                                "second operation keyword; the last one wins"
                            );
                            d.operation = operation;
                            d.operation_params.clear();
                        }
                        None => descriptor = Some(from_prefix(url, token.span.start, operation)),
                    }
                    // The keyword's own `/` separator belongs to the block.
                    last = token.span.end + 1;
                    block_end = url
                        .get(last..)
                        .and_then(|block| block.find('/'))
                        .map(|offset| last + offset);
                }
                _ if closed => {
                    trace!(span = %token.span, "past the parameter block; ignored");
                    drop_incomplete(pending.take());
                }
                TokenKind::Underscore => {}
                TokenKind::Param(code) => {
                    let Some(d) = descriptor.as_mut() else {
                        trace!(code, "parameter before any operation; ignored");
                        continue;
                    };
                    let rule = self
                        .grammar
                        .table(d.operation)
                        .get(code)
                        .ok_or_else(|| ParseError::UnknownParameter(code.to_owned()))?;
                    drop_incomplete(pending.take());
                    last = token.span.end;
                    if rule.standalone {
                        d.bucket_mut(rule.bucket).insert_flag(code);
                    } else {
                        pending = Some(Pending::new(code, rule));
                    }
                }
                TokenKind::Value(value) => {
                    let Some(p) = pending.as_mut() else {
                        trace!(value, "value outside a parameter; ignored");
                        continue;
                    };
                    p.parts.push(value);
                    p.remaining = p.remaining.saturating_sub(1);
                    last = token.span.end;
                    if p.remaining == 0 {
                        if let (Some(done), Some(d)) = (pending.take(), descriptor.as_mut()) {
                            d.bucket_mut(done.bucket)
                                .insert_value(done.code, done.parts.join("_"));
                        }
                    }
                }
                TokenKind::AutoValue => {
                    let Some(p) = pending.take() else {
                        trace!("`auto` outside a parameter; ignored");
                        continue;
                    };
                    if !p.allows_auto {
                        return Err(ParseError::AutoNotAllowed(p.code.to_owned()));
                    }
                    if let Some(d) = descriptor.as_mut() {
                        d.bucket_mut(p.bucket).insert_value(p.code, "auto");
                    }
                    last = token.span.end;
                }
            }
        }
        drop_incomplete(pending);

        let Some(mut descriptor) = descriptor else {
            return Err(missing_operation(url));
        };
        descriptor.image_name = url.get(last + 1..).unwrap_or("").to_owned();
        debug!(
            operation = %descriptor.operation,
            params = descriptor.param_count(),
            "parsed image url"
        );
        Ok(descriptor)
    }
}

/// Descriptor for `operation`, with `<endpoint>/<image_id>/<version>` taken
/// from the text before the keyword at `start`.
fn from_prefix(url: &str, start: usize, operation: OperationKind) -> Descriptor {
    let prefix = url.get(..start.saturating_sub(1)).unwrap_or("");
    let mut segments: Vec<&str> = prefix.split('/').collect();
    let version = segments.pop().unwrap_or_default();
    let image_id = segments.pop().unwrap_or_default();
    Descriptor::new(segments.join("/"), image_id, operation).with_version(version)
}

/// Error for a URL in which no operation keyword was found.
///
/// The grammar puts the operation third from the end
/// (`.../<op>/<params>/<name>`); if that segment is a word, it is reported
/// as the unknown operation.
fn missing_operation(url: &str) -> ParseError {
    let segments: Vec<&str> = url.split('/').collect();
    let candidate = segments
        .len()
        .checked_sub(3)
        .and_then(|i| segments.get(i))
        .copied()
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic()));
    match candidate {
        Some(segment) => ParseError::UnknownOperation(segment.to_ascii_lowercase()),
        None => ParseError::MissingOperation(url.to_owned()),
    }
}

#[cfg(test)]
mod tests;
