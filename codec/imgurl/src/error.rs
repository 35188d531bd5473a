//! Errors raised while building a request.

use std::fmt;

use imgurl_ir::OperationKind;
use thiserror::Error;

/// The part of a URL a builder argument is written to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UrlPart {
    Endpoint,
    ImageId,
    Version,
    ImageName,
}

impl fmt::Display for UrlPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UrlPart::Endpoint => "endpoint",
            UrlPart::ImageId => "image id",
            UrlPart::Version => "version",
            UrlPart::ImageName => "image name",
        })
    }
}

/// A builder argument the URL grammar cannot carry.
///
/// The parser finds the operation as the first `/`-delimited segment that
/// spells a keyword, so no segment in front of the parameter block may spell
/// one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{part} segment `{segment}` is an operation keyword")]
    KeywordSegment { part: UrlPart, segment: String },
    /// Image ids and versions are single path segments.
    #[error("{part} `{value}` contains `/`")]
    Slash { part: UrlPart, value: String },
}

/// Check the `/` segments of `value` that end up followed by a `/` in the
/// URL. Image names are the last thing in the URL, so their final segment is
/// exempt.
pub(crate) fn check_segments(part: UrlPart, value: &str) -> Result<(), RequestError> {
    let mut segments: Vec<&str> = value.split('/').collect();
    match part {
        UrlPart::ImageId | UrlPart::Version if segments.len() > 1 => {
            return Err(RequestError::Slash {
                part,
                value: value.to_owned(),
            });
        }
        UrlPart::ImageName => {
            segments.pop();
        }
        _ => {}
    }
    match segments
        .into_iter()
        .find(|s| OperationKind::from_keyword(&s.to_ascii_lowercase()).is_some())
    {
        Some(segment) => Err(RequestError::KeywordSegment {
            part,
            segment: segment.to_owned(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
