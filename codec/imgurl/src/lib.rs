//! Build, parse and rewrite image transformation URLs.
//!
//! A URL names one image and one operation applied to it:
//!
//! ```text
//! <endpoint>/<image_id>/<version>/<opcode>/<params>/<image_name>
//! ```
//!
//! - [`ImageRequest`] starts a URL; its `canvas`/`fill`/`fit`/`crop`
//!   methods return a typed builder ([`ops`]). Arguments the URL grammar
//!   cannot carry are rejected with a [`RequestError`].
//! - [`from_url`] parses a URL back into the matching builder so it can be
//!   edited and re-serialized.
//! - [`parse`] and [`serialize`] work on the bare [`Descriptor`].
//! - [`layout`] computes contain/cover placement for crop frames.
//!
//! For any descriptor a builder can produce, `parse(&serialize(&d)) == Ok(d)`.

pub mod defaults;
mod error;
mod image;
pub mod layout;
pub mod ops;

pub use defaults::{Alignment, Anchor, Color, Level, ResizeFilter};
pub use error::{RequestError, UrlPart};
pub use image::ImageRequest;
pub use imgurl_fmt::serialize;
pub use imgurl_ir::{Bucket, Descriptor, OperationKind, ParamMap};
pub use imgurl_parse::{parse, GrammarError, ParseError};
pub use layout::{contain_layout, cover_layout, Layout};
pub use ops::{
    Adjustments, Aligned, Canvas, Crop, Fill, Filters, Fit, Operation, Resampled, Sizing, Transform,
};

use std::sync::Once;

use tracing::debug;

/// Parse a URL into the builder for its operation.
///
/// ```
/// use imgurl::{Operation, Sizing, Transform};
///
/// let url = "http://media.example.com/12345/v1/fit/w_50,h_100,oil/cat.jpg";
/// let Ok(Operation::Fit(fit)) = imgurl::from_url(url) else {
///     panic!("expected a fit operation");
/// };
/// assert_eq!(
///     fit.width(100).to_url(),
///     "http://media.example.com/12345/v1/fit/w_100,h_100,oil/cat.jpg"
/// );
/// ```
pub fn from_url(url: &str) -> Result<Operation, ParseError> {
    let descriptor = parse(url)?;
    debug!(operation = %descriptor.operation, "builder from url");
    Ok(Operation::from(descriptor))
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for the codec's diagnostics.
///
/// Does nothing unless `RUST_LOG` is set, and only runs once per process.
/// If another global subscriber is already installed, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
