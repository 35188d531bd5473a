//! Entry point of the builder API.

use imgurl_fmt::endpoint_prefix;
use imgurl_ir::{Descriptor, OperationKind, DEFAULT_VERSION};

use crate::error::{check_segments, RequestError, UrlPart};
use crate::ops::{Canvas, Crop, Fill, Fit};

/// An image on a media endpoint, ready to have an operation applied.
///
/// ```
/// use imgurl::{Filters, ImageRequest, Sizing, Transform};
///
/// let url = ImageRequest::new("http://media.example.com", "12345")?
///     .name("cat.jpg")?
///     .fit()
///     .size(100, 300)
///     .oil(true)
///     .to_url();
/// assert_eq!(url, "http://media.example.com/12345/v1/fit/w_100,h_300,oil/cat.jpg");
/// # Ok::<(), imgurl::RequestError>(())
/// ```
///
/// No `/` segment in front of the operation may spell an operation keyword,
/// since the parser would read it as the operation:
///
/// ```
/// use imgurl::{ImageRequest, RequestError};
///
/// assert!(matches!(
///     ImageRequest::new("http://media.example.com", "crop"),
///     Err(RequestError::KeywordSegment { .. })
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRequest {
    endpoint: String,
    image_id: String,
    version: String,
    name: String,
}

impl ImageRequest {
    /// Surrounding whitespace is trimmed from both arguments. An endpoint
    /// without a scheme is made protocol-relative (`//host`).
    ///
    /// Fails if the image id holds a `/`, or if it or any endpoint segment
    /// spells an operation keyword.
    pub fn new(endpoint: &str, image_id: &str) -> Result<Self, RequestError> {
        let endpoint = endpoint.trim();
        let image_id = image_id.trim();
        check_segments(UrlPart::Endpoint, endpoint)?;
        check_segments(UrlPart::ImageId, image_id)?;
        Ok(ImageRequest {
            endpoint: endpoint_prefix(endpoint).into_owned(),
            image_id: image_id.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
            name: String::new(),
        })
    }

    /// Same rules as the image id.
    pub fn version(mut self, version: &str) -> Result<Self, RequestError> {
        let version = version.trim();
        check_segments(UrlPart::Version, version)?;
        version.clone_into(&mut self.version);
        Ok(self)
    }

    /// Image file name; each operation starts with it and may override it.
    ///
    /// The name may contain `/`, but only its last segment may spell an
    /// operation keyword.
    pub fn name(mut self, name: &str) -> Result<Self, RequestError> {
        let name = name.trim();
        check_segments(UrlPart::ImageName, name)?;
        name.clone_into(&mut self.name);
        Ok(self)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn image_id(&self) -> &str {
        &self.image_id
    }

    fn descriptor(&self, operation: OperationKind) -> Descriptor {
        Descriptor::new(self.endpoint.as_str(), self.image_id.as_str(), operation)
            .with_version(self.version.as_str())
            .with_image_name(self.name.as_str())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::from_descriptor(self.descriptor(OperationKind::Canvas))
    }

    pub fn fill(&self) -> Fill {
        Fill::from_descriptor(self.descriptor(OperationKind::Fill))
    }

    pub fn fit(&self) -> Fit {
        Fit::from_descriptor(self.descriptor(OperationKind::Fit))
    }

    pub fn crop(&self) -> Crop {
        Crop::from_descriptor(self.descriptor(OperationKind::Crop))
    }
}
