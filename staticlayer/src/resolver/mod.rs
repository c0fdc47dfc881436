//! Texture resolution pipeline.
//!
//! [`TextureResolver::resolve`] turns a (tile, layer) pair into a placed
//! texture:
//!
//! ```text
//! ┌──────────────┐   ┌───────────┐   ┌────────────┐   ┌─────────┐   ┌──────────────┐
//! │ catalog +    │──►│ surface?  │──►│ best fit   │──►│ fetch + │──►│ refine       │
//! │ coverage     │   │ (else     │   │ selection  │   │ decode  │   │ binding,     │
//! │ checks       │   │  NoOp)    │   │            │   │         │   │ compute pitch│
//! └──────────────┘   └───────────┘   └────────────┘   └─────────┘   └──────────────┘
//! ```
//!
//! # Concurrency
//!
//! Resolutions for different tiles are independent futures and may run
//! concurrently. The layer's catalog must be loaded before `resolve` is
//! called for that layer; there is no internal synchronization with the
//! loader, and a layer still loading reports
//! [`SelectionError::NoCatalog`](crate::error::SelectionError::NoCatalog).
//! `resolve` borrows the tile mutably, so only one resolution per tile can
//! be in flight.

mod command;
mod improve;

pub use command::TextureCommand;
pub use improve::{needs_improvement, should_improve};

use tracing::{debug, warn};

use crate::catalog::select_best_fit;
use crate::error::{SelectionError, TextureError};
use crate::extent::{Extent, Pitch};
use crate::fetch::{RawTexture, TextureFetcher};
use crate::layer::Layer;
use crate::tile::Tile;

/// A fetched image together with its placement on a tile.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTexture {
    /// Decoded image pixels.
    pub raw: RawTexture,
    /// Geographic extent of the fetched image.
    pub extent: Extent,
    /// Display coordinates of the fetched image.
    pub coords: Extent,
    /// Placement of the tile within the image.
    pub pitch: Pitch,
}

/// Successful outcome of a resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// An image was fetched for the tile.
    Resolved(ResolvedTexture),
    /// The tile has no rendering surface, so nothing was fetched.
    NoOp,
}

impl Resolution {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    pub fn texture(&self) -> Option<&ResolvedTexture> {
        match self {
            Self::Resolved(texture) => Some(texture),
            Self::NoOp => None,
        }
    }

    pub fn into_texture(self) -> Option<ResolvedTexture> {
        match self {
            Self::Resolved(texture) => Some(texture),
            Self::NoOp => None,
        }
    }
}

/// Returns true if some image of the layer fully covers the tile.
///
/// The whole catalog is scanned; a layer without a catalog covers nothing.
pub fn is_within_coverage(tile: &Tile, layer: &Layer) -> bool {
    layer
        .catalog()
        .is_some_and(|catalog| catalog.covers(tile.extent()))
}

/// Selects, fetches and places static imagery for tiles.
pub struct TextureResolver<F: TextureFetcher> {
    fetcher: F,
}

impl<F: TextureFetcher> TextureResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resolve the color texture of `tile` for `layer`.
    ///
    /// On success the tile's binding for the layer is refined towards the
    /// selected image; see [`TextureBinding::refine`](crate::tile::TextureBinding::refine).
    ///
    /// # Errors
    ///
    /// - [`TextureError::Selection`] if the layer has no catalog yet, or no
    ///   image covers the tile
    /// - [`TextureError::Coverage`] if the tile lies outside every image
    /// - [`TextureError::Configuration`] if the image URL cannot be derived
    /// - [`TextureError::Fetch`] if the image cannot be fetched or decoded
    pub async fn resolve(&self, tile: &mut Tile, layer: &Layer) -> Result<Resolution, TextureError> {
        let catalog = layer.catalog().ok_or(SelectionError::NoCatalog)?;

        if !catalog.covers(tile.extent()) {
            return Err(TextureError::Coverage {
                tile: tile.to_string(),
                layer_extent: layer.describe_extent(),
            });
        }

        if !tile.has_surface() {
            debug!(tile = tile.id(), layer = %layer.id(), "Tile has no surface, nothing to resolve");
            return Ok(Resolution::NoOp);
        }

        let selection =
            select_best_fit(catalog, tile.extent()).ok_or(SelectionError::NoCoveringImage)?;
        let url = layer.image_url(selection.image())?;
        debug!(
            tile = tile.id(),
            layer = %layer.id(),
            image = selection.image(),
            url = %url,
            "Selected image"
        );

        let raw = self.fetcher.fetch(&url).await.map_err(|e| {
            warn!(tile = tile.id(), url = %url, error = %e, "Image fetch failed");
            TextureError::from(e)
        })?;

        let level = tile.level();
        if tile.binding_mut(layer.id()).refine(selection, level) {
            debug!(tile = tile.id(), image = selection.image(), level, "Binding refined");
        }

        Ok(Resolution::Resolved(ResolvedTexture {
            raw,
            extent: selection.extent().clone(),
            coords: selection.extent().clone(),
            pitch: tile.extent().offset_to_parent(selection.extent()),
        }))
    }

    /// Execute a scheduled texture command.
    pub async fn execute(&self, command: TextureCommand<'_>) -> Result<Resolution, TextureError> {
        let TextureCommand { requester, layer } = command;
        self.resolve(requester, layer).await
    }
}
