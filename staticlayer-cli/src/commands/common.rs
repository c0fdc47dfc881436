//! Common types and utilities shared across CLI commands.

use std::future::Future;
use std::path::Path;

use staticlayer::config::{parse_bounds, ConfigFile};
use staticlayer::extent::Extent;
use staticlayer::layer::Layer;
use staticlayer::provider::HttpStaticImageryProvider;
use staticlayer::tile::{SurfaceId, Tile};

use crate::error::CliError;

/// Identifier given to tiles built from command-line arguments.
const CLI_TILE_ID: u64 = 1;

/// Load the configuration from `path`, or the default location.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    match path {
        Some(path) => Ok(ConfigFile::load_from(path)?),
        None => Ok(ConfigFile::load()?),
    }
}

/// Build the layer named `id` from the configuration.
pub fn layer_from_config(config: &ConfigFile, id: &str) -> Result<Layer, CliError> {
    let layer_config = config
        .layer(id)
        .ok_or_else(|| CliError::UnknownLayer(id.to_string()))?;
    Ok(Layer::from_config(layer_config)?)
}

/// Parse a `W,E,S,N` argument.
pub fn parse_extent_arg(value: &str) -> Result<[f64; 4], String> {
    parse_bounds(value).ok_or_else(|| format!("expected W,E,S,N, got '{}'", value))
}

/// Extent of a command-line target, in the layer's projection.
pub fn target_extent(layer: &Layer, bounds: [f64; 4]) -> Result<Extent, CliError> {
    Extent::from_bounds(layer.projection().clone(), bounds)
        .map_err(|e| CliError::InvalidArgument(e.to_string()))
}

/// Tile with a surface attached, ready for resolution.
pub fn target_tile(extent: Extent, level: u32) -> Tile {
    Tile::new(CLI_TILE_ID, extent, level).with_surface(SurfaceId::new(CLI_TILE_ID))
}

/// Create the provider and load the catalog of one layer.
pub async fn prepare_layer(
    config: &ConfigFile,
    id: &str,
) -> Result<(HttpStaticImageryProvider, Layer), CliError> {
    let mut layer = layer_from_config(config, id)?;
    let provider = HttpStaticImageryProvider::from_settings(&config.http)?;
    provider.preprocess_layer(&mut layer).await?;
    Ok((provider, layer))
}

/// Run a future to completion on a fresh multi-threaded runtime.
pub fn block_on<T>(future: impl Future<Output = Result<T, CliError>>) -> Result<T, CliError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(future)
}
