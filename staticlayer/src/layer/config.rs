//! Declarative layer settings.

use crate::extent::DEFAULT_PROJECTION;

/// Declarative description of a layer, as read from a config file.
///
/// `extent` is kept as raw `[west, east, south, north]` numbers; it becomes
/// an [`Extent`](crate::extent::Extent) in `projection` when the layer is built.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerConfig {
    pub id: String,
    pub projection: String,
    pub extent: Option<[f64; 4]>,
    pub url: String,
}

impl LayerConfig {
    /// Create a layer config in the default projection with no extent.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            projection: DEFAULT_PROJECTION.to_string(),
            extent: None,
            url: url.into(),
        }
    }

    pub fn with_projection(mut self, projection: impl Into<String>) -> Self {
        self.projection = projection.into();
        self
    }

    pub fn with_extent(mut self, extent: [f64; 4]) -> Self {
        self.extent = Some(extent);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayerConfig::new("ortho", "http://h/metadata.json");
        assert_eq!(config.projection, "EPSG:4326");
        assert_eq!(config.extent, None);
    }
}
