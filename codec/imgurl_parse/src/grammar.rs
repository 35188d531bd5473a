//! Grammar tables.
//!
//! Each operation has a [`GrammarTable`] declaring which parameter codes it
//! accepts and how each one is shaped ([`ParameterRule`]). Tables are composed
//! from named [`ParamSet`]s: one set specific to the operation plus the three
//! sets every operation shares ([`SIZING`], [`ADJUSTMENTS`], [`FILTERS`]).
//!
//! Composition rejects a code declared by two sets, so adding a parameter to a
//! shared set can never silently shadow an operation-specific one.
//!
//! | operation | specific set        | shared sets                      |
//! |-----------|---------------------|----------------------------------|
//! | `canvas`  | [`CANVAS_PARAMS`]   | sizing, adjustments, filters     |
//! | `fill`    | [`FILL_PARAMS`]     | sizing, adjustments, filters     |
//! | `fit`     | [`FIT_PARAMS`]      | sizing, adjustments, filters     |
//! | `crop`    | [`CROP_PARAMS`]     | sizing, adjustments, filters     |

use std::sync::LazyLock;

use imgurl_ir::{Bucket, OperationKind};
use rustc_hash::FxHashMap;

use crate::GrammarError;

/// Shape of one parameter code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterRule {
    /// Takes no value (a bare flag such as `oil`).
    pub standalone: bool,
    /// Number of `_`-joined value components. Zero for standalone flags.
    pub arity: usize,
    /// Whether the literal `auto` may replace the whole value.
    pub allows_auto: bool,
    /// Section of the descriptor the value lands in.
    pub bucket: Bucket,
}

impl ParameterRule {
    pub const fn flag(bucket: Bucket) -> Self {
        ParameterRule {
            standalone: true,
            arity: 0,
            allows_auto: false,
            bucket,
        }
    }

    pub const fn scalar(bucket: Bucket) -> Self {
        Self::composite(1, bucket)
    }

    pub const fn composite(arity: usize, bucket: Bucket) -> Self {
        ParameterRule {
            standalone: false,
            arity,
            allows_auto: false,
            bucket,
        }
    }

    #[must_use]
    pub const fn or_auto(mut self) -> Self {
        self.allows_auto = true;
        self
    }
}

/// A named group of parameter declarations.
#[derive(Copy, Clone, Debug)]
pub struct ParamSet {
    pub name: &'static str,
    pub rules: &'static [(&'static str, ParameterRule)],
}

const OP: Bucket = Bucket::Operation;
const ADJ: Bucket = Bucket::Adjustment;
const FLT: Bucket = Bucket::Filter;

/// Width, height, quality and baseline encoding.
pub const SIZING: ParamSet = ParamSet {
    name: "sizing",
    rules: &[
        ("w", ParameterRule::scalar(OP)),
        ("h", ParameterRule::scalar(OP)),
        ("q", ParameterRule::scalar(OP).or_auto()),
        ("bl", ParameterRule::flag(OP)),
    ],
};

/// Colour adjustments.
pub const ADJUSTMENTS: ParamSet = ParamSet {
    name: "adjustments",
    rules: &[
        ("br", ParameterRule::scalar(ADJ).or_auto()),
        ("con", ParameterRule::scalar(ADJ).or_auto()),
        ("sat", ParameterRule::scalar(ADJ).or_auto()),
        ("hue", ParameterRule::scalar(ADJ).or_auto()),
        ("vib", ParameterRule::scalar(ADJ).or_auto()),
        ("auto_adj", ParameterRule::flag(ADJ)),
    ],
};

/// Visual effects. `usm` is the long spelling of the unsharp mask `us`.
pub const FILTERS: ParamSet = ParamSet {
    name: "filters",
    rules: &[
        ("oil", ParameterRule::flag(FLT)),
        ("neg", ParameterRule::flag(FLT)),
        ("pix", ParameterRule::scalar(FLT)),
        ("pixfs", ParameterRule::scalar(FLT)),
        ("blur", ParameterRule::scalar(FLT)),
        ("shrp", ParameterRule::scalar(FLT)),
        ("us", ParameterRule::composite(3, FLT).or_auto()),
        ("usm", ParameterRule::composite(3, FLT).or_auto()),
    ],
};

/// Canvas: alignment (`al`, short `a`) and background colour.
pub const CANVAS_PARAMS: ParamSet = ParamSet {
    name: "canvas",
    rules: &[
        ("al", ParameterRule::scalar(OP).or_auto()),
        ("a", ParameterRule::scalar(OP).or_auto()),
        ("c", ParameterRule::scalar(OP)),
    ],
};

/// Fill: resize filter and alignment.
pub const FILL_PARAMS: ParamSet = ParamSet {
    name: "fill",
    rules: &[
        ("rf", ParameterRule::scalar(OP)),
        ("al", ParameterRule::scalar(OP).or_auto()),
        ("a", ParameterRule::scalar(OP).or_auto()),
    ],
};

/// Fit: resize filter.
pub const FIT_PARAMS: ParamSet = ParamSet {
    name: "fit",
    rules: &[("rf", ParameterRule::scalar(OP))],
};

/// Crop: origin coordinates.
pub const CROP_PARAMS: ParamSet = ParamSet {
    name: "crop",
    rules: &[("x", ParameterRule::scalar(OP)), ("y", ParameterRule::scalar(OP))],
};

/// Parameter rules accepted by one operation.
#[derive(Clone, Debug)]
pub struct GrammarTable {
    operation: OperationKind,
    rules: FxHashMap<&'static str, ParameterRule>,
}

impl GrammarTable {
    /// Merge `sets` into one table.
    ///
    /// Fails on the first code declared twice, naming both sets involved.
    pub fn compose(operation: OperationKind, sets: &[ParamSet]) -> Result<Self, GrammarError> {
        let mut rules = FxHashMap::default();
        let mut origin: FxHashMap<&'static str, &'static str> = FxHashMap::default();
        for set in sets {
            for &(code, rule) in set.rules {
                if let Some(first) = origin.insert(code, set.name) {
                    return Err(GrammarError::DuplicateCode {
                        operation,
                        code,
                        first,
                        second: set.name,
                    });
                }
                rules.insert(code, rule);
            }
        }
        Ok(GrammarTable { operation, rules })
    }

    #[inline]
    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    #[inline]
    pub fn get(&self, code: &str) -> Option<&ParameterRule> {
        self.rules.get(code)
    }

    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.rules.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All codes in the table, sorted.
    pub fn codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.rules.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

/// One table per operation.
#[derive(Clone, Debug)]
pub struct Grammar {
    canvas: GrammarTable,
    fill: GrammarTable,
    fit: GrammarTable,
    crop: GrammarTable,
}

impl Grammar {
    /// Compose the built-in tables.
    pub fn compose() -> Result<Self, GrammarError> {
        let shared = |specific: ParamSet| [specific, SIZING, ADJUSTMENTS, FILTERS];
        Ok(Grammar {
            canvas: GrammarTable::compose(OperationKind::Canvas, &shared(CANVAS_PARAMS))?,
            fill: GrammarTable::compose(OperationKind::Fill, &shared(FILL_PARAMS))?,
            fit: GrammarTable::compose(OperationKind::Fit, &shared(FIT_PARAMS))?,
            crop: GrammarTable::compose(OperationKind::Crop, &shared(CROP_PARAMS))?,
        })
    }

    pub fn table(&self, operation: OperationKind) -> &GrammarTable {
        match operation {
            OperationKind::Canvas => &self.canvas,
            OperationKind::Fill => &self.fill,
            OperationKind::Fit => &self.fit,
            OperationKind::Crop => &self.crop,
        }
    }
}

static STANDARD: LazyLock<Grammar> = LazyLock::new(|| match Grammar::compose() {
    Ok(grammar) => grammar,
    Err(err) => panic!("built-in grammar tables are inconsistent: {err}"),
});

/// The built-in grammar, composed on first use.
pub fn standard() -> &'static Grammar {
    &STANDARD
}
