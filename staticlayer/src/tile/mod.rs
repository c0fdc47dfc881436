//! Tiles and their per-layer texture bindings.
//!
//! A [`Tile`] is the unit of rendered surface the imagery resolver textures.
//! The rendering system owns tiles; the resolver only reads a tile's extent,
//! level and surface, and refines the [`TextureBinding`] slot of the layer it
//! is resolving.
//!
//! # Example
//!
//! ```
//! use staticlayer::extent::{Extent, Projection};
//! use staticlayer::layer::LayerId;
//! use staticlayer::tile::{SurfaceId, Tile};
//!
//! let extent = Extent::new(Projection::default(), 3.0, 3.5, 3.0, 3.5).unwrap();
//! let tile = Tile::new(1, extent, 12).with_surface(SurfaceId::new(42));
//!
//! assert!(tile.has_surface());
//! assert!(tile.binding(&LayerId::new("ortho")).is_none());
//! ```

mod binding;

pub use binding::TextureBinding;

use std::collections::HashMap;
use std::fmt;

use crate::extent::Extent;
use crate::layer::LayerId;

/// Handle to the rendering surface (material) a tile draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A tile of the rendered surface.
#[derive(Debug, Clone)]
pub struct Tile {
    id: u64,
    extent: Extent,
    level: u32,
    /// Active rendering surface; tiles without one need no texture.
    surface: Option<SurfaceId>,
    bindings: HashMap<LayerId, TextureBinding>,
}

impl Tile {
    /// Create a tile with no surface and no bindings.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier used in logs and error messages
    /// * `extent` - Geographic footprint of the tile
    /// * `level` - Level of detail
    pub fn new(id: u64, extent: Extent, level: u32) -> Self {
        Self {
            id,
            extent,
            level,
            surface: None,
            bindings: HashMap::new(),
        }
    }

    /// Attach a rendering surface.
    pub fn with_surface(mut self, surface: SurfaceId) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Seed the binding for a layer.
    pub fn with_binding(mut self, layer: LayerId, binding: TextureBinding) -> Self {
        self.bindings.insert(layer, binding);
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Detach the rendering surface, e.g. when the tile is hidden.
    pub fn clear_surface(&mut self) {
        self.surface = None;
    }

    /// The current binding for a layer, if one was ever created.
    pub fn binding(&self, layer: &LayerId) -> Option<&TextureBinding> {
        self.bindings.get(layer)
    }

    /// The binding slot for a layer, created empty on first access.
    pub fn binding_mut(&mut self, layer: &LayerId) -> &mut TextureBinding {
        self.bindings.entry(layer.clone()).or_default()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile #{} L{} {}", self.id, self.level, self.extent)
    }
}
