//! Operation keywords and compound parameter codes.
//!
//! The tokenizer only needs to know the spelling of the four operation
//! keywords. Which parameters each operation accepts is grammar knowledge
//! and lives in the parser.

/// The top-level operation keywords, in their canonical lowercase spelling.
pub const KEYWORDS: [&str; 4] = ["canvas", "fill", "fit", "crop"];

/// Parameter codes that contain an underscore.
///
/// Plain letter-run scanning would split these at the `_` and read the tail
/// as a value, so they are matched as a whole before the letter-run rules.
pub const COMPOUND_PARAMS: [&str; 1] = ["auto_adj"];

/// Returns `true` if `text` is an operation keyword.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    matches!(text, "canvas" | "fill" | "fit" | "crop")
}

/// Returns the compound parameter code that `rest` starts with, if any.
///
/// The code must be followed by a parameter delimiter (`_`, `,` or `/`),
/// the same condition a plain letter run needs to become a parameter.
pub(crate) fn compound_param_at(rest: &str) -> Option<&'static str> {
    COMPOUND_PARAMS.iter().copied().find(|code| {
        rest.starts_with(code)
            && matches!(rest.as_bytes().get(code.len()), Some(b'_' | b',' | b'/'))
    })
}
