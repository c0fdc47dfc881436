//! Error types shared by catalog loading and texture resolution.
//!
//! Every failure a caller can observe from the public operations is a
//! [`TextureError`]. Callers usually branch on the variant:
//!
//! - [`TextureError::Configuration`] aborts layer setup.
//! - [`TextureError::Coverage`] means the tile should be hidden for the layer.
//! - [`TextureError::Selection`] means nothing is renderable for the tile.
//! - [`TextureError::Catalog`] and [`TextureError::Fetch`] are transport or
//!   data problems reported by collaborators.
//!
//! A tile without a rendering surface is not an error at all; it resolves to
//! [`Resolution::NoOp`](crate::resolver::Resolution::NoOp).

use thiserror::Error;

use crate::fetch::FetchError;

/// Why no image could be selected for a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The layer's catalog has not been loaded.
    #[error("no catalog")]
    NoCatalog,

    /// No catalog entry fully covers the tile.
    #[error("no covering image")]
    NoCoveringImage,
}

/// Errors surfaced by layer preprocessing and texture resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextureError {
    /// Layer is misconfigured (e.g. missing extent, bad source URL).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Tile lies outside every image of the layer.
    #[error("Tile '{tile}' is outside layer bbox {layer_extent}")]
    Coverage { tile: String, layer_extent: String },

    /// Catalog missing, or no entry covers the tile.
    #[error("Selection failed: {0}")]
    Selection(#[from] SelectionError),

    /// Catalog description could not be fetched or parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Image could not be fetched or decoded.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl TextureError {
    /// Returns true for errors that only affect a single tile request.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Configuration(_) | Self::Catalog(_))
    }
}
