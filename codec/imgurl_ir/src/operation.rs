//! Operation kinds and parameter buckets.

use std::fmt;

/// The primary transform applied to an image. Exactly one per descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OperationKind {
    /// Resize the canvas without scaling the image.
    Canvas,
    /// Fill the exact box, cropping the excess.
    Fill,
    /// Fit inside the box, preserving proportions.
    Fit,
    /// Cut a rectangle at `x`,`y`.
    Crop,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Canvas,
        OperationKind::Fill,
        OperationKind::Fit,
        OperationKind::Crop,
    ];

    /// The path segment naming this operation.
    pub const fn keyword(self) -> &'static str {
        match self {
            OperationKind::Canvas => "canvas",
            OperationKind::Fill => "fill",
            OperationKind::Fit => "fit",
            OperationKind::Crop => "crop",
        }
    }

    /// Look up an operation by its (lowercase) keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "canvas" => Some(OperationKind::Canvas),
            "fill" => Some(OperationKind::Fill),
            "fit" => Some(OperationKind::Fit),
            "crop" => Some(OperationKind::Crop),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Which section of a descriptor a parameter's value belongs to.
///
/// Adjustments and filters are shared across operations; operation
/// parameters are specific to the descriptor's [`OperationKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bucket {
    Operation,
    Adjustment,
    Filter,
}

impl Bucket {
    /// Canonical serialization order of the sections.
    pub const CANONICAL_ORDER: [Bucket; 3] =
        [Bucket::Operation, Bucket::Adjustment, Bucket::Filter];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trips() {
        for kind in OperationKind::ALL {
            assert_eq!(OperationKind::from_keyword(kind.keyword()), Some(kind));
        }
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(OperationKind::from_keyword("wm"), None);
        assert_eq!(OperationKind::from_keyword("FIT"), None);
    }

    #[test]
    fn display_is_keyword() {
        assert_eq!(OperationKind::Crop.to_string(), "crop");
    }
}
