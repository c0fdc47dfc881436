//! Static imagery provider.
//!
//! [`StaticImageryProvider`] is the surface the tile scheduler talks to. It
//! combines a [`CatalogLoader`] for layer setup with a [`TextureResolver`]
//! for per-tile requests.
//!
//! # Lifecycle
//!
//! ```text
//! preprocess_layer(layer) ──► catalog attached (once per layer)
//!                                   │
//!         ┌─────────────────────────┼──────────────────────────┐
//!         ▼                         ▼                          ▼
//! is_within_coverage(tile)  should_improve(tile)  resolve_color_texture(tile)
//! ```
//!
//! `preprocess_layer` must complete before any tile request targets the
//! layer. Tile requests for distinct tiles may then run concurrently.
//!
//! # Example
//!
//! ```ignore
//! use staticlayer::provider::StaticImageryProvider;
//! use staticlayer::fetch::AsyncReqwestClient;
//!
//! let provider = StaticImageryProvider::with_http_client(AsyncReqwestClient::new()?);
//! provider.preprocess_layer(&mut layer).await?;
//! if provider.should_improve(&layer, &tile) {
//!     let resolution = provider.resolve_color_texture(&mut tile, &layer).await?;
//! }
//! ```

use futures::future::join_all;
use tracing::{info, warn};

use crate::catalog::CatalogLoader;
use crate::config::HttpSettings;
use crate::error::TextureError;
use crate::fetch::{AsyncHttpClient, AsyncReqwestClient, HttpTextureFetcher, TextureFetcher};
use crate::layer::Layer;
use crate::resolver::{self, Resolution, TextureCommand, TextureResolver};
use crate::tile::Tile;

/// Provider over the HTTP stack used in production.
pub type HttpStaticImageryProvider =
    StaticImageryProvider<AsyncReqwestClient, HttpTextureFetcher<AsyncReqwestClient>>;

/// Selects and places static imagery for tiles.
pub struct StaticImageryProvider<C: AsyncHttpClient, F: TextureFetcher> {
    loader: CatalogLoader<C>,
    resolver: TextureResolver<F>,
}

impl<C: AsyncHttpClient + Clone> StaticImageryProvider<C, HttpTextureFetcher<C>> {
    /// Create a provider that loads catalogs and images through one client.
    pub fn with_http_client(http_client: C) -> Self {
        Self::new(
            CatalogLoader::new(http_client.clone()),
            TextureResolver::new(HttpTextureFetcher::new(http_client)),
        )
    }
}

impl HttpStaticImageryProvider {
    /// Create a reqwest-backed provider from the `[http]` settings.
    pub fn from_settings(settings: &HttpSettings) -> Result<Self, TextureError> {
        let client = AsyncReqwestClient::with_timeout(settings.timeout_secs)?;
        Ok(Self::with_http_client(client))
    }
}

impl<C: AsyncHttpClient, F: TextureFetcher> StaticImageryProvider<C, F> {
    pub fn new(loader: CatalogLoader<C>, resolver: TextureResolver<F>) -> Self {
        Self { loader, resolver }
    }

    pub fn loader(&self) -> &CatalogLoader<C> {
        &self.loader
    }

    pub fn resolver(&self) -> &TextureResolver<F> {
        &self.resolver
    }

    /// Validate a layer, then load and attach its catalog.
    ///
    /// # Errors
    ///
    /// [`TextureError::Configuration`] if the layer has no declared extent
    /// (no request is made), [`TextureError::Catalog`] if the description
    /// cannot be fetched or parsed.
    pub async fn preprocess_layer(&self, layer: &mut Layer) -> Result<(), TextureError> {
        let catalog = self.loader.load(layer).await?;
        layer.attach_catalog(catalog);
        Ok(())
    }

    /// Preprocess several layers concurrently.
    ///
    /// Results are returned in input order; one layer failing does not
    /// affect the others.
    pub async fn preprocess_layers(&self, layers: &mut [Layer]) -> Vec<Result<(), TextureError>> {
        let results = join_all(layers.iter_mut().map(|layer| self.preprocess_layer(layer))).await;

        for (layer, result) in layers.iter().zip(&results) {
            match result {
                Ok(()) => info!(layer = %layer.id(), "Layer ready"),
                Err(e) => warn!(layer = %layer.id(), error = %e, "Layer setup failed"),
            }
        }
        results
    }

    /// Returns true if some image of the layer fully covers the tile.
    pub fn is_within_coverage(&self, tile: &Tile, layer: &Layer) -> bool {
        resolver::is_within_coverage(tile, layer)
    }

    /// Returns true if the tile's texture for the layer should be re-resolved.
    pub fn should_improve(&self, layer: &Layer, tile: &Tile) -> bool {
        resolver::should_improve(layer, tile)
    }

    /// Resolve the color texture of a tile for a layer.
    pub async fn resolve_color_texture(
        &self,
        tile: &mut Tile,
        layer: &Layer,
    ) -> Result<Resolution, TextureError> {
        self.resolver.resolve(tile, layer).await
    }

    /// Run a command handed over by the tile scheduler.
    pub async fn execute(&self, command: TextureCommand<'_>) -> Result<Resolution, TextureError> {
        self.resolver.execute(command).await
    }
}
