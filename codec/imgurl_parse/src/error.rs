//! Parse and grammar error types.

use imgurl_ir::OperationKind;
use thiserror::Error;

/// Why a URL could not be parsed.
///
/// Every variant is terminal: the parse stops at the first error and no
/// partial descriptor is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The operation segment is not one of `canvas`, `fill`, `fit`, `crop`.
    #[error("unknown image operation `{0}`")]
    UnknownOperation(String),
    /// The code is not accepted by the active operation's grammar table.
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
    /// `auto` was given for a parameter whose rule does not allow it.
    #[error("`auto` is not allowed for parameter `{0}`")]
    AutoNotAllowed(String),
    /// The URL has no segment in operation position at all.
    #[error("no image operation found in `{0}`")]
    MissingOperation(String),
}

impl ParseError {
    /// The keyword or code the error is about.
    pub fn subject(&self) -> &str {
        match self {
            ParseError::UnknownOperation(s)
            | ParseError::UnknownParameter(s)
            | ParseError::AutoNotAllowed(s)
            | ParseError::MissingOperation(s) => s,
        }
    }
}

/// A defect in grammar table composition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("parameter `{code}` of `{operation}` is declared by both `{first}` and `{second}`")]
    DuplicateCode {
        operation: OperationKind,
        code: &'static str,
        first: &'static str,
        second: &'static str,
    },
}
