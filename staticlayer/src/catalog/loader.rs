//! Catalog description loading.
//!
//! A catalog description is a JSON object mapping each image filename to
//! its bounds in the layer's projection, ordered `[west, east, south, north]`:
//!
//! ```json
//! {
//!   "img1.jpg": [0, 10, 0, 10],
//!   "img2.jpg": [2, 4, 2, 4]
//! }
//! ```
//!
//! Entries keep the document order, which matters for best-fit selection
//! between incomparable images.

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::{Catalog, CatalogEntry};
use crate::error::TextureError;
use crate::extent::{Extent, Projection};
use crate::fetch::AsyncHttpClient;
use crate::layer::Layer;

/// Builds a layer's catalog from its remote description.
pub struct CatalogLoader<C: AsyncHttpClient> {
    http_client: C,
}

impl<C: AsyncHttpClient> CatalogLoader<C> {
    pub fn new(http_client: C) -> Self {
        Self { http_client }
    }

    pub fn http_client(&self) -> &C {
        &self.http_client
    }

    /// Fetch and parse the catalog description of `layer`.
    ///
    /// The layer must declare its extent; a layer without one is rejected
    /// with [`TextureError::Configuration`] before any request is made.
    /// The returned catalog is not attached to the layer.
    pub async fn load(&self, layer: &Layer) -> Result<Catalog, TextureError> {
        if layer.declared_extent().is_none() {
            return Err(TextureError::Configuration(format!(
                "layer '{}': extent is required",
                layer.id()
            )));
        }

        debug!(layer = %layer.id(), url = layer.source_url(), "Fetching catalog description");
        let body = self.http_client.get(layer.source_url()).await.map_err(|e| {
            warn!(layer = %layer.id(), error = %e, "Catalog fetch failed");
            TextureError::Catalog(format!("failed to fetch {}: {}", layer.source_url(), e))
        })?;

        let catalog = parse_catalog(&body, layer.projection())?;
        info!(layer = %layer.id(), images = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}

/// Parse a catalog description, tagging every extent with `projection`.
pub fn parse_catalog(body: &[u8], projection: &Projection) -> Result<Catalog, TextureError> {
    let document: Map<String, Value> = serde_json::from_slice(body)
        .map_err(|e| TextureError::Catalog(format!("invalid catalog description: {}", e)))?;

    let entries = document
        .into_iter()
        .map(|(image, bounds)| parse_entry(image, &bounds, projection))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(entries))
}

fn parse_entry(
    image: String,
    bounds: &Value,
    projection: &Projection,
) -> Result<CatalogEntry, TextureError> {
    let numbers = bounds
        .as_array()
        .and_then(|values| values.iter().map(Value::as_f64).collect::<Option<Vec<f64>>>())
        .ok_or_else(|| {
            TextureError::Catalog(format!("'{}': bounds must be an array of numbers", image))
        })?;

    let extent = Extent::from_bounds(projection.clone(), &numbers)
        .map_err(|e| TextureError::Catalog(format!("'{}': {}", image, e)))?;

    Ok(CatalogEntry::new(image, extent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchError, MockAsyncHttpClient};
    use crate::layer::LayerConfig;

    const URL: &str = "http://host/ortho/metadata.json";

    fn layer(extent: Option<[f64; 4]>) -> Layer {
        let mut config = LayerConfig::new("ortho", URL).with_projection("EPSG:2154");
        config.extent = extent;
        Layer::from_config(&config).unwrap()
    }

    #[test]
    fn test_parse_keeps_document_order() {
        let body = br#"{"zeta.jpg": [0, 1, 0, 1], "alpha.jpg": [0, 2, 0, 2], "mid.jpg": [0, 3, 0, 3]}"#;
        let catalog = parse_catalog(body, &Projection::default()).unwrap();

        let names: Vec<_> = catalog.iter().map(|e| e.image()).collect();
        assert_eq!(names, vec!["zeta.jpg", "alpha.jpg", "mid.jpg"]);
    }

    #[test]
    fn test_parse_tags_projection() {
        let body = br#"{"a.jpg": [0.5, 10, -3, 4.25]}"#;
        let catalog = parse_catalog(body, &Projection::new("EPSG:2154")).unwrap();

        let entry = catalog.get("a.jpg").unwrap();
        assert_eq!(entry.extent().projection(), &Projection::new("EPSG:2154"));
        assert_eq!(entry.extent().bounds(), [0.5, 10.0, -3.0, 4.25]);
    }

    #[test]
    fn test_parse_empty_object() {
        let catalog = parse_catalog(b"{}", &Projection::default()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let result = parse_catalog(b"[1, 2, 3]", &Projection::default());
        assert!(matches!(result, Err(TextureError::Catalog(_))));
    }

    #[test]
    fn test_parse_rejects_bad_bounds() {
        let cases: [&[u8]; 4] = [
            br#"{"a": [0, 1, 0]}"#,
            br#"{"a": [0, 1, 0, "x"]}"#,
            br#"{"a": "0,1,0,1"}"#,
            br#"{"a": [5, 1, 0, 1]}"#,
        ];
        for body in cases {
            let result = parse_catalog(body, &Projection::default());
            assert!(
                matches!(result, Err(TextureError::Catalog(ref msg)) if msg.contains("'a'")),
                "expected catalog error for {:?}",
                std::str::from_utf8(body)
            );
        }
    }

    #[tokio::test]
    async fn test_load_without_extent_makes_no_request() {
        let loader = CatalogLoader::new(MockAsyncHttpClient::new().with_response(URL, "{}"));

        let result = loader.load(&layer(None)).await;
        assert!(matches!(result, Err(TextureError::Configuration(_))));
        assert_eq!(loader.http_client().call_count(), 0);
    }

    #[tokio::test]
    async fn test_load_fetches_source_url() {
        let body = r#"{"img1": [0, 10, 0, 10], "img2": [2, 4, 2, 4]}"#;
        let loader = CatalogLoader::new(MockAsyncHttpClient::new().with_response(URL, body));

        let catalog = loader.load(&layer(Some([0.0, 10.0, 0.0, 10.0]))).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(loader.http_client().requested_urls(), vec![URL]);
    }

    #[tokio::test]
    async fn test_load_maps_transport_errors() {
        let loader = CatalogLoader::new(
            MockAsyncHttpClient::new().with_error(URL, FetchError::Http("timed out".to_string())),
        );

        let result = loader.load(&layer(Some([0.0, 1.0, 0.0, 1.0]))).await;
        assert!(matches!(result, Err(TextureError::Catalog(ref msg)) if msg.contains("timed out")));
    }
}
