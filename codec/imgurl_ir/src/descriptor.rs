//! The descriptor: one image transformation request.

use crate::{Bucket, OperationKind, ParamMap};

/// Version segment used when none is given.
pub const DEFAULT_VERSION: &str = "v1";

/// Structured form of `<endpoint>/<image_id>/<version>/<op>/<params>/<image_name>`.
///
/// Descriptors are plain data: no back-references, no shared ownership.
/// Serializing one never mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    pub endpoint: String,
    pub image_id: String,
    pub version: String,
    pub image_name: String,
    pub operation: OperationKind,
    pub operation_params: ParamMap,
    pub adjustments: ParamMap,
    pub filters: ParamMap,
}

impl Descriptor {
    /// An empty request for `operation` on an image, at [`DEFAULT_VERSION`].
    pub fn new(
        endpoint: impl Into<String>,
        image_id: impl Into<String>,
        operation: OperationKind,
    ) -> Self {
        Descriptor {
            endpoint: endpoint.into(),
            image_id: image_id.into(),
            version: DEFAULT_VERSION.to_owned(),
            image_name: String::new(),
            operation,
            operation_params: ParamMap::new(),
            adjustments: ParamMap::new(),
            filters: ParamMap::new(),
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_image_name(mut self, name: impl Into<String>) -> Self {
        self.image_name = name.into();
        self
    }

    /// The map holding entries of `bucket`.
    pub fn bucket(&self, bucket: Bucket) -> &ParamMap {
        match bucket {
            Bucket::Operation => &self.operation_params,
            Bucket::Adjustment => &self.adjustments,
            Bucket::Filter => &self.filters,
        }
    }

    pub fn bucket_mut(&mut self, bucket: Bucket) -> &mut ParamMap {
        match bucket {
            Bucket::Operation => &mut self.operation_params,
            Bucket::Adjustment => &mut self.adjustments,
            Bucket::Filter => &mut self.filters,
        }
    }

    /// Total number of parameters across all sections.
    pub fn param_count(&self) -> usize {
        self.operation_params.len() + self.adjustments.len() + self.filters.len()
    }
}
