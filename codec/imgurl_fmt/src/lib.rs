//! Canonical serializer for image transformation URLs.
//!
//! Turns an [`imgurl_ir::Descriptor`] back into
//! `<endpoint>/<image_id>/<version>/<opcode>/<params>/<image_name>`.
//!
//! # Canonical form
//!
//! The parameter block is one comma-separated run. Its sections always come
//! in the same order: operation parameters, then adjustments, then filters.
//! Inside a section, entries keep their insertion order. A flag renders as
//! its bare code, any other entry as `code_value`.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction for string building and measuring

pub mod emitter;

pub use emitter::{Emitter, LengthEmitter, StringEmitter};

use std::borrow::Cow;

use imgurl_ir::{Bucket, Descriptor, ParamMap};
use tracing::trace;

/// Serialize a descriptor to its canonical URL.
///
/// # Example
///
/// ```
/// use imgurl_ir::{Descriptor, OperationKind};
///
/// let mut d = Descriptor::new("http://img.example.com", "42", OperationKind::Fit)
///     .with_image_name("cat.jpg");
/// d.operation_params.insert_value("w", "100");
/// d.filters.insert_flag("oil");
/// assert_eq!(
///     imgurl_fmt::serialize(&d),
///     "http://img.example.com/42/v1/fit/w_100,oil/cat.jpg"
/// );
/// ```
pub fn serialize(descriptor: &Descriptor) -> String {
    let mut measure = LengthEmitter::new();
    serialize_into(descriptor, &mut measure);
    let mut emitter = StringEmitter::with_capacity(measure.len());
    serialize_into(descriptor, &mut emitter);
    emitter.output()
}

/// Serialize a descriptor into any [`Emitter`].
pub fn serialize_into<E: Emitter>(descriptor: &Descriptor, emitter: &mut E) {
    emitter.emit(&endpoint_prefix(&descriptor.endpoint));
    emitter.emit_slash();
    emitter.emit(&descriptor.image_id);
    emitter.emit_slash();
    emitter.emit(&descriptor.version);
    emitter.emit_slash();
    emitter.emit(descriptor.operation.keyword());
    emitter.emit_slash();

    let mut first = true;
    for bucket in Bucket::CANONICAL_ORDER {
        let params = descriptor.bucket(bucket);
        trace!(?bucket, entries = params.len(), "emitting section");
        emit_section(params, emitter, &mut first);
    }

    emitter.emit_slash();
    emitter.emit(&descriptor.image_name);
}

/// Normalize the endpoint into the URL prefix.
///
/// An endpoint that starts with neither `http` nor `//` is made
/// protocol-relative, however short the host name. An empty endpoint stays
/// empty.
pub fn endpoint_prefix(endpoint: &str) -> Cow<'_, str> {
    if endpoint.is_empty() || endpoint.starts_with("http") || endpoint.starts_with("//") {
        Cow::Borrowed(endpoint)
    } else {
        Cow::Owned(format!("//{endpoint}"))
    }
}

fn emit_section<E: Emitter>(params: &ParamMap, emitter: &mut E, first: &mut bool) {
    for (code, value) in params.iter() {
        if !*first {
            emitter.emit_comma();
        }
        *first = false;
        emitter.emit(code);
        if let Some(value) = value {
            emitter.emit_underscore();
            emitter.emit(value);
        }
    }
}

#[cfg(test)]
mod tests;
