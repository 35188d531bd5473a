//! Descriptor model for image transformation URLs.
//!
//! A [`Descriptor`] is the structured form of one URL path: which image,
//! which [`OperationKind`], and three ordered parameter maps. The parser
//! produces descriptors, the serializer consumes them, and the builder in
//! the `imgurl` crate edits them. The model is purely textual: values are
//! stored exactly as they appear in a URL.

mod descriptor;
mod operation;
mod param_map;

pub use descriptor::{Descriptor, DEFAULT_VERSION};
pub use operation::{Bucket, OperationKind};
pub use param_map::ParamMap;
