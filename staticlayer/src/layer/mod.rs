//! Imagery layers.
//!
//! A [`Layer`] ties a catalog description URL to the projection and overall
//! extent its images are expressed in. Layers start without a catalog; the
//! catalog is attached exactly once by layer preprocessing and then shared
//! read-only by every tile request.
//!
//! # Resource addressing
//!
//! The catalog description must be named [`METADATA_FILENAME`]. Image URLs
//! are derived by swapping that trailing filename for the image identifier,
//! so images are expected to sit next to the description:
//!
//! ```
//! use staticlayer::layer::image_url;
//!
//! let url = image_url("https://host/ortho/metadata.json", "tile_04.jpg");
//! assert_eq!(url.as_deref(), Some("https://host/ortho/tile_04.jpg"));
//! ```

mod config;

pub use config::LayerConfig;

use std::fmt;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::TextureError;
use crate::extent::{Extent, Projection};

/// Filename every catalog description URL must end with.
pub const METADATA_FILENAME: &str = "metadata.json";

/// Derive the URL of an image from the layer's catalog description URL.
///
/// Returns `None` if `source_url` does not end with [`METADATA_FILENAME`].
pub fn image_url(source_url: &str, image: &str) -> Option<String> {
    source_url
        .strip_suffix(METADATA_FILENAME)
        .map(|base| format!("{}{}", base, image))
}

/// Identifier of a layer, unique within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A static imagery layer.
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    projection: Projection,
    declared_extent: Option<Extent>,
    source_url: String,
    catalog: Option<Arc<Catalog>>,
}

impl Layer {
    /// Create a layer without validating its source URL.
    pub fn new(
        id: LayerId,
        projection: Projection,
        declared_extent: Option<Extent>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            projection,
            declared_extent,
            source_url: source_url.into(),
            catalog: None,
        }
    }

    /// Build a layer from its declarative configuration.
    ///
    /// A bare four-number extent is promoted to an [`Extent`] in the layer's
    /// projection. A missing extent is accepted here and rejected later by
    /// preprocessing.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::Configuration`] if the URL does not end with
    /// [`METADATA_FILENAME`] or the extent bounds are invalid.
    pub fn from_config(config: &LayerConfig) -> Result<Self, TextureError> {
        if !config.url.ends_with(METADATA_FILENAME) {
            return Err(TextureError::Configuration(format!(
                "layer '{}': url must end with '{}', got '{}'",
                config.id, METADATA_FILENAME, config.url
            )));
        }

        let projection = Projection::new(config.projection.as_str());
        let declared_extent = config
            .extent
            .map(|bounds| Extent::from_bounds(projection.clone(), bounds))
            .transpose()
            .map_err(|e| TextureError::Configuration(format!("layer '{}': {}", config.id, e)))?;

        Ok(Self::new(
            LayerId::new(config.id.as_str()),
            projection,
            declared_extent,
            config.url.as_str(),
        ))
    }

    pub fn id(&self) -> &LayerId {
        &self.id
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn declared_extent(&self) -> Option<&Extent> {
        self.declared_extent.as_ref()
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// The loaded catalog, if preprocessing has completed.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_deref()
    }

    /// Shared handle to the loaded catalog.
    pub fn catalog_handle(&self) -> Option<Arc<Catalog>> {
        self.catalog.clone()
    }

    /// Attach a freshly loaded catalog, replacing any previous one whole.
    pub fn attach_catalog(&mut self, catalog: Catalog) {
        self.catalog = Some(Arc::new(catalog));
    }

    /// URL of an image of this layer.
    pub fn image_url(&self, image: &str) -> Result<String, TextureError> {
        image_url(&self.source_url, image).ok_or_else(|| {
            TextureError::Configuration(format!(
                "layer '{}': cannot derive image url from '{}'",
                self.id, self.source_url
            ))
        })
    }

    /// Human-readable layer bounds for error messages.
    pub(crate) fn describe_extent(&self) -> String {
        match &self.declared_extent {
            Some(extent) => extent.to_string(),
            None => format!("{} [undeclared]", self.projection),
        }
    }
}
