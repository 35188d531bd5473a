//! Builder defaults and enumerated parameter values.

use std::fmt;

pub use imgurl_ir::DEFAULT_VERSION;

/// Default JPEG quality used by [`Sizing::quality_default`](crate::Sizing::quality_default).
pub const QUALITY: i32 = 75;

/// Default unsharp-mask radius.
pub const US_RADIUS: f64 = 0.50;

/// Default unsharp-mask amount.
pub const US_AMOUNT: f64 = 0.20;

/// Default unsharp-mask threshold.
pub const US_THRESHOLD: f64 = 0.00;

/// The reserved `auto` value.
pub const AUTO: &str = "auto";

/// Where an operation focuses or aligns the image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    Center,
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
    Left,
    Right,
    /// Center on one detected face.
    Face,
    /// Keep all detected faces in frame, as far as the canvas allows.
    AllFaces,
    /// Let the service choose.
    Auto,
}

/// Canvas anchors use the alignment codes.
pub type Anchor = Alignment;

impl Alignment {
    pub const ALL: [Alignment; 12] = [
        Alignment::Center,
        Alignment::Top,
        Alignment::TopLeft,
        Alignment::TopRight,
        Alignment::Bottom,
        Alignment::BottomLeft,
        Alignment::BottomRight,
        Alignment::Left,
        Alignment::Right,
        Alignment::Face,
        Alignment::AllFaces,
        Alignment::Auto,
    ];

    /// The URL value for this alignment.
    pub fn code(self) -> &'static str {
        match self {
            Alignment::Center => "c",
            Alignment::Top => "t",
            Alignment::TopLeft => "tl",
            Alignment::TopRight => "tr",
            Alignment::Bottom => "b",
            Alignment::BottomLeft => "bl",
            Alignment::BottomRight => "br",
            Alignment::Left => "l",
            Alignment::Right => "r",
            Alignment::Face => "f",
            Alignment::AllFaces => "fs",
            Alignment::Auto => AUTO,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resampling filter used when resizing, sent as its numeric id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResizeFilter {
    Point = 1,
    Box = 2,
    Triangle = 3,
    Hermite = 4,
    Hanning = 5,
    Hamming = 6,
    Blackman = 7,
    Gaussian = 8,
    Quadratic = 9,
    Cubic = 10,
    Catrom = 11,
    Mitchell = 12,
    Jinc = 13,
    Sinc = 14,
    SincFast = 15,
    Kaiser = 16,
    Welch = 17,
    Parzen = 18,
    Bohman = 19,
    Bartlett = 20,
    Lagrange = 21,
    Lanczos = 22,
    LanczosSharp = 23,
    Lanczos2 = 24,
    Lanczos2Sharp = 25,
    Robidoux = 26,
    RobidouxSharp = 27,
    Cosine = 28,
}

impl ResizeFilter {
    pub const ALL: [ResizeFilter; 28] = [
        ResizeFilter::Point,
        ResizeFilter::Box,
        ResizeFilter::Triangle,
        ResizeFilter::Hermite,
        ResizeFilter::Hanning,
        ResizeFilter::Hamming,
        ResizeFilter::Blackman,
        ResizeFilter::Gaussian,
        ResizeFilter::Quadratic,
        ResizeFilter::Cubic,
        ResizeFilter::Catrom,
        ResizeFilter::Mitchell,
        ResizeFilter::Jinc,
        ResizeFilter::Sinc,
        ResizeFilter::SincFast,
        ResizeFilter::Kaiser,
        ResizeFilter::Welch,
        ResizeFilter::Parzen,
        ResizeFilter::Bohman,
        ResizeFilter::Bartlett,
        ResizeFilter::Lagrange,
        ResizeFilter::Lanczos,
        ResizeFilter::LanczosSharp,
        ResizeFilter::Lanczos2,
        ResizeFilter::Lanczos2Sharp,
        ResizeFilter::Robidoux,
        ResizeFilter::RobidouxSharp,
        ResizeFilter::Cosine,
    ];

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A level that is either a number or `auto`.
///
/// Used by quality and the colour adjustments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Auto,
    Value(i32),
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level::Value(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Auto => f.write_str(AUTO),
            Level::Value(v) => write!(f, "{v}"),
        }
    }
}

/// An RGB colour, written to URLs as six lowercase hex digits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse `rrggbb` hex, with or without a leading `#`, in either case.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |at: usize| {
            hex.get(at..at + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests;
