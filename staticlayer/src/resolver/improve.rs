//! Texture improvement checks.

use crate::catalog::{select_best_fit, Catalog};
use crate::extent::Extent;
use crate::layer::Layer;
use crate::tile::{TextureBinding, Tile};

/// Returns true if the tile's texture for `layer` should be re-resolved.
///
/// This is the case when some image covers the tile and either nothing is
/// bound yet or the best-fitting image differs from the bound one. Only
/// image identity is compared.
pub fn should_improve(layer: &Layer, tile: &Tile) -> bool {
    match layer.catalog() {
        Some(catalog) => needs_improvement(catalog, tile.extent(), tile.binding(layer.id())),
        None => false,
    }
}

/// Binding-level form of [`should_improve`].
pub fn needs_improvement(catalog: &Catalog, target: &Extent, current: Option<&TextureBinding>) -> bool {
    let Some(selection) = select_best_fit(catalog, target) else {
        return false;
    };

    match current.and_then(|binding| binding.source_file.as_deref()) {
        None => true,
        Some(bound) => bound != selection.image(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerConfig;
    use crate::resolver::tests::{ext, loaded_layer, tile, URL};

    #[test]
    fn test_no_covering_image_never_improves() {
        let layer = loaded_layer();
        assert!(!should_improve(&layer, &tile([20.0, 21.0, 20.0, 21.0], 4)));
    }

    #[test]
    fn test_unbound_tile_improves() {
        let layer = loaded_layer();
        assert!(should_improve(&layer, &tile([3.0, 3.5, 3.0, 3.5], 4)));
    }

    #[test]
    fn test_same_image_does_not_improve() {
        let layer = loaded_layer();
        let binding = TextureBinding::stamped("img2", ext([2.0, 4.0, 2.0, 4.0]), 4);
        let tile = tile([3.0, 3.5, 3.0, 3.5], 4).with_binding(layer.id().clone(), binding);

        assert!(!should_improve(&layer, &tile));
    }

    #[test]
    fn test_different_image_improves() {
        let layer = loaded_layer();
        let binding = TextureBinding::stamped("img1", ext([0.0, 10.0, 0.0, 10.0]), 4);
        let tile = tile([3.0, 3.5, 3.0, 3.5], 4).with_binding(layer.id().clone(), binding);

        assert!(should_improve(&layer, &tile));
    }

    #[test]
    fn test_binding_without_file_improves() {
        let layer = loaded_layer();
        let binding = TextureBinding {
            coord_zoom: Some(3),
            ..Default::default()
        };
        let tile = tile([3.0, 3.5, 3.0, 3.5], 4).with_binding(layer.id().clone(), binding);

        assert!(should_improve(&layer, &tile));
    }

    #[test]
    fn test_layer_without_catalog_never_improves() {
        let config = LayerConfig::new("ortho", URL).with_extent([0.0, 10.0, 0.0, 10.0]);
        let layer = Layer::from_config(&config).unwrap();
        assert!(!should_improve(&layer, &tile([3.0, 3.5, 3.0, 3.5], 4)));
    }
}
