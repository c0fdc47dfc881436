//! Scheduler-facing command type.

use crate::layer::Layer;
use crate::tile::Tile;

/// A unit of texture work handed over by the tile scheduler.
///
/// The scheduler names the tile that asked for a texture (`requester`) and
/// the layer to texture it from. Run it with
/// [`TextureResolver::execute`](super::TextureResolver::execute).
#[derive(Debug)]
pub struct TextureCommand<'a> {
    pub requester: &'a mut Tile,
    pub layer: &'a Layer,
}

impl<'a> TextureCommand<'a> {
    pub fn new(requester: &'a mut Tile, layer: &'a Layer) -> Self {
        Self { requester, layer }
    }
}
