//! Fluent builders for the four image operations.
//!
//! Each operation is a thin wrapper around a [`Descriptor`]. Setters are
//! grouped into traits with default methods, and each builder opts into the
//! groups its operation accepts:
//!
//! | builder  | [`Sizing`] | [`Aligned`] | [`Resampled`] | own setters        |
//! |----------|:----------:|:-----------:|:-------------:|--------------------|
//! | [`Canvas`] | yes      | yes         |               | `background`       |
//! | [`Fill`]   | yes      | yes         | yes           |                    |
//! | [`Fit`]    | yes      |             | yes           |                    |
//! | [`Crop`]   | yes      |             |               | `x`, `y`, `coords` |
//!
//! [`Adjustments`] and [`Filters`] are available on every builder.
//!
//! Setting a code that is already present overwrites its value in place.
//! Passing `false` to a flag setter removes the flag.

use std::fmt;

use imgurl_ir::{Bucket, Descriptor, OperationKind};
use tracing::trace;

use crate::defaults::{Alignment, Color, Level, ResizeFilter, AUTO, QUALITY};
use crate::error::{check_segments, RequestError, UrlPart};

/// Access to the descriptor behind a builder.
pub trait Transform: Sized {
    /// The operation this builder produces.
    const KIND: OperationKind;

    fn descriptor(&self) -> &Descriptor;

    fn descriptor_mut(&mut self) -> &mut Descriptor;

    fn into_descriptor(self) -> Descriptor;

    /// Set the image file name that ends the URL. Same rules as
    /// [`ImageRequest::name`](crate::ImageRequest::name).
    fn name(mut self, name: &str) -> Result<Self, RequestError> {
        let name = name.trim();
        check_segments(UrlPart::ImageName, name)?;
        name.clone_into(&mut self.descriptor_mut().image_name);
        Ok(self)
    }

    /// Serialize to the canonical URL.
    fn to_url(&self) -> String {
        imgurl_fmt::serialize(self.descriptor())
    }
}

fn set<T: Transform>(mut op: T, bucket: Bucket, code: &str, value: impl fmt::Display) -> T {
    let value = value.to_string();
    trace!(operation = %T::KIND, ?bucket, code, value = %value, "set");
    op.descriptor_mut().bucket_mut(bucket).insert_value(code, value);
    op
}

/// Decimal text as the tokenizer reads it back: non-finite values are
/// written in lowercase (`nan`, `inf`, `-inf`).
struct Decimal(f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            v if v.is_nan() => f.write_str("nan"),
            v if v.is_infinite() && v > 0.0 => f.write_str("inf"),
            v if v.is_infinite() => f.write_str("-inf"),
            v => write!(f, "{v}"),
        }
    }
}

fn flag<T: Transform>(mut op: T, bucket: Bucket, code: &str, on: bool) -> T {
    trace!(operation = %T::KIND, ?bucket, code, on, "flag");
    let params = op.descriptor_mut().bucket_mut(bucket);
    if on {
        params.insert_flag(code);
    } else {
        params.remove(code);
    }
    op
}

/// Width, height, quality and baseline. Accepted by every operation.
pub trait Sizing: Transform {
    #[must_use]
    fn width(self, w: u32) -> Self {
        set(self, Bucket::Operation, "w", w)
    }

    #[must_use]
    fn height(self, h: u32) -> Self {
        set(self, Bucket::Operation, "h", h)
    }

    #[must_use]
    fn size(self, w: u32, h: u32) -> Self {
        self.width(w).height(h)
    }

    #[must_use]
    fn size_with_quality(self, w: u32, h: u32, q: impl Into<Level>) -> Self {
        self.size(w, h).quality(q)
    }

    /// JPEG quality, `0..=100` or [`Level::Auto`].
    #[must_use]
    fn quality(self, q: impl Into<Level>) -> Self {
        set(self, Bucket::Operation, "q", q.into())
    }

    #[must_use]
    fn quality_default(self) -> Self {
        self.quality(QUALITY)
    }

    /// Progressive (baseline) JPEG output.
    #[must_use]
    fn baseline(self, on: bool) -> Self {
        flag(self, Bucket::Operation, "bl", on)
    }
}

/// Alignment of the image inside the requested frame.
pub trait Aligned: Transform {
    #[must_use]
    fn alignment(self, a: Alignment) -> Self {
        set(self, Bucket::Operation, "al", a)
    }

    /// Same as [`alignment`](Self::alignment), written with the short `a` code.
    #[must_use]
    fn anchor(self, a: Alignment) -> Self {
        set(self, Bucket::Operation, "a", a)
    }
}

/// Choice of resampling filter.
pub trait Resampled: Transform {
    #[must_use]
    fn resize_filter(self, rf: ResizeFilter) -> Self {
        set(self, Bucket::Operation, "rf", rf)
    }
}

/// Colour corrections. Accepted by every operation.
pub trait Adjustments: Transform {
    /// Brightness, `-100..=100` or [`Level::Auto`].
    #[must_use]
    fn brightness(self, level: impl Into<Level>) -> Self {
        set(self, Bucket::Adjustment, "br", level.into())
    }

    #[must_use]
    fn contrast(self, level: impl Into<Level>) -> Self {
        set(self, Bucket::Adjustment, "con", level.into())
    }

    #[must_use]
    fn saturation(self, level: impl Into<Level>) -> Self {
        set(self, Bucket::Adjustment, "sat", level.into())
    }

    #[must_use]
    fn hue(self, level: impl Into<Level>) -> Self {
        set(self, Bucket::Adjustment, "hue", level.into())
    }

    #[must_use]
    fn vibrance(self, level: impl Into<Level>) -> Self {
        set(self, Bucket::Adjustment, "vib", level.into())
    }

    /// Let the service tune brightness, contrast, hue, vibrance and saturation.
    #[must_use]
    fn auto_adjust(self, on: bool) -> Self {
        flag(self, Bucket::Adjustment, "auto_adj", on)
    }

    fn has_adjustments(&self) -> bool {
        !self.descriptor().adjustments.is_empty()
    }
}

/// Visual effects. Accepted by every operation.
pub trait Filters: Transform {
    /// Oil paint effect.
    #[must_use]
    fn oil(self, on: bool) -> Self {
        flag(self, Bucket::Filter, "oil", on)
    }

    /// Negate the colours.
    #[must_use]
    fn negative(self, on: bool) -> Self {
        flag(self, Bucket::Filter, "neg", on)
    }

    /// Pixelate with squares `pixels` wide.
    #[must_use]
    fn pixelate(self, pixels: u32) -> Self {
        set(self, Bucket::Filter, "pix", pixels)
    }

    /// Pixelate detected faces only.
    #[must_use]
    fn pixelate_faces(self, pixels: u32) -> Self {
        set(self, Bucket::Filter, "pixfs", pixels)
    }

    /// Blur, as a percentage.
    #[must_use]
    fn blur(self, percent: u32) -> Self {
        set(self, Bucket::Filter, "blur", percent)
    }

    #[must_use]
    fn sharpen(self, radius: f64) -> Self {
        set(self, Bucket::Filter, "shrp", Decimal(radius))
    }

    /// Unsharp mask with explicit radius, amount and threshold.
    #[must_use]
    fn unsharp_mask(self, radius: f64, amount: f64, threshold: f64) -> Self {
        set(
            self,
            Bucket::Filter,
            "us",
            format_args!(
                "{}_{}_{}",
                Decimal(radius),
                Decimal(amount),
                Decimal(threshold)
            ),
        )
    }

    #[must_use]
    fn unsharp_mask_auto(self) -> Self {
        set(self, Bucket::Filter, "us", AUTO)
    }

    fn has_filters(&self) -> bool {
        !self.descriptor().filters.is_empty()
    }
}

macro_rules! operation_builders {
    ($($(#[$meta:meta])* $name:ident => $kind:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub struct $name {
                descriptor: Descriptor,
            }

            impl $name {
                /// Wrap a descriptor whose operation is already this one.
                pub(crate) fn from_descriptor(descriptor: Descriptor) -> Self {
                    debug_assert_eq!(descriptor.operation, OperationKind::$kind);
                    $name { descriptor }
                }
            }

            impl Transform for $name {
                const KIND: OperationKind = OperationKind::$kind;

                fn descriptor(&self) -> &Descriptor {
                    &self.descriptor
                }

                fn descriptor_mut(&mut self) -> &mut Descriptor {
                    &mut self.descriptor
                }

                fn into_descriptor(self) -> Descriptor {
                    self.descriptor
                }
            }

            impl Sizing for $name {}
            impl Adjustments for $name {}
            impl Filters for $name {}

            impl From<$name> for Descriptor {
                fn from(op: $name) -> Descriptor {
                    op.descriptor
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.to_url())
                }
            }
        )*
    };
}

operation_builders! {
    /// Resize the canvas around the image, padding or trimming as needed.
    Canvas => Canvas;
    /// Fill the requested frame, cropping what does not fit.
    Fill => Fill;
    /// Fit the whole image inside the requested frame.
    Fit => Fit;
    /// Cut a rectangle out of the image.
    Crop => Crop;
}

impl Aligned for Canvas {}
impl Aligned for Fill {}
impl Resampled for Fill {}
impl Resampled for Fit {}

impl Canvas {
    /// Background colour, written as six lowercase hex digits.
    #[must_use]
    pub fn background(self, color: Color) -> Self {
        set(self, Bucket::Operation, "c", color)
    }
}

impl Crop {
    #[must_use]
    pub fn x(self, x: u32) -> Self {
        set(self, Bucket::Operation, "x", x)
    }

    #[must_use]
    pub fn y(self, y: u32) -> Self {
        set(self, Bucket::Operation, "y", y)
    }

    #[must_use]
    pub fn coords(self, x: u32, y: u32) -> Self {
        self.x(x).y(y)
    }
}

/// A builder of whichever operation a URL named.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Canvas(Canvas),
    Fill(Fill),
    Fit(Fit),
    Crop(Crop),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        self.descriptor().operation
    }

    pub fn descriptor(&self) -> &Descriptor {
        match self {
            Operation::Canvas(op) => op.descriptor(),
            Operation::Fill(op) => op.descriptor(),
            Operation::Fit(op) => op.descriptor(),
            Operation::Crop(op) => op.descriptor(),
        }
    }

    pub fn into_descriptor(self) -> Descriptor {
        match self {
            Operation::Canvas(op) => op.into_descriptor(),
            Operation::Fill(op) => op.into_descriptor(),
            Operation::Fit(op) => op.into_descriptor(),
            Operation::Crop(op) => op.into_descriptor(),
        }
    }

    pub fn to_url(&self) -> String {
        imgurl_fmt::serialize(self.descriptor())
    }
}

impl From<Descriptor> for Operation {
    fn from(descriptor: Descriptor) -> Self {
        match descriptor.operation {
            OperationKind::Canvas => Operation::Canvas(Canvas::from_descriptor(descriptor)),
            OperationKind::Fill => Operation::Fill(Fill::from_descriptor(descriptor)),
            OperationKind::Fit => Operation::Fit(Fit::from_descriptor(descriptor)),
            OperationKind::Crop => Operation::Crop(Crop::from_descriptor(descriptor)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

#[cfg(test)]
mod tests;
