//! Per-layer texture binding state of a tile.

use crate::catalog::CatalogEntry;
use crate::extent::Extent;

/// What a tile currently has bound for one layer.
///
/// `source_file` and `coord_zoom` are stamped together and only ever move
/// towards finer levels; see [`TextureBinding::refine`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextureBinding {
    /// Image identifier of the bound texture, if any.
    pub source_file: Option<String>,
    /// Extent of the most recently resolved image.
    pub extent: Option<Extent>,
    /// Tile level at which `source_file` was stamped.
    pub coord_zoom: Option<u32>,
}

impl TextureBinding {
    /// Create an empty binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a binding already stamped with a file and zoom.
    pub fn stamped(source_file: impl Into<String>, extent: Extent, coord_zoom: u32) -> Self {
        Self {
            source_file: Some(source_file.into()),
            extent: Some(extent),
            coord_zoom: Some(coord_zoom),
        }
    }

    /// Returns true if an image has been stamped on this binding.
    pub fn is_bound(&self) -> bool {
        self.source_file.is_some()
    }

    /// Attribute a resolved catalog entry to this binding.
    ///
    /// The extent is always recorded. Zoom and source file are stamped only
    /// when nothing was stamped before or the stamped zoom is numerically
    /// larger than `level`. Returns true when the stamp changed.
    pub fn refine(&mut self, entry: &CatalogEntry, level: u32) -> bool {
        self.extent = Some(entry.extent().clone());

        match self.coord_zoom {
            Some(zoom) if zoom <= level => false,
            _ => {
                self.coord_zoom = Some(level);
                self.source_file = Some(entry.image().to_string());
                true
            }
        }
    }
}
