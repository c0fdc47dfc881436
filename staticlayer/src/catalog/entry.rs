//! Catalog entry type.

use serde::{Deserialize, Serialize};

use crate::extent::Extent;

/// One geo-referenced image available to a layer.
///
/// `image` is a filename relative to the directory holding the layer's
/// catalog description.
///
/// # Example
///
/// ```
/// use staticlayer::catalog::CatalogEntry;
/// use staticlayer::extent::{Extent, Projection};
///
/// let extent = Extent::from_bounds(Projection::default(), [0.0, 10.0, 0.0, 10.0]).unwrap();
/// let entry = CatalogEntry::new("img1.jpg", extent);
/// assert_eq!(entry.image(), "img1.jpg");
/// assert_eq!(entry.dimensions(), (10.0, 10.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    image: String,
    extent: Extent,
}

impl CatalogEntry {
    pub fn new(image: impl Into<String>, extent: Extent) -> Self {
        Self {
            image: image.into(),
            extent,
        }
    }

    /// Image identifier (relative filename).
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Width and height of the image footprint.
    pub fn dimensions(&self) -> (f64, f64) {
        self.extent.dimensions()
    }

    /// Returns true if `target` lies entirely within this image.
    pub fn covers(&self, target: &Extent) -> bool {
        target.is_inside(&self.extent)
    }
}
