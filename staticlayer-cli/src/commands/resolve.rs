//! `resolve` command: fetch the texture for a tile and show its placement.

use clap::Args;
use console::style;
use staticlayer::config::ConfigFile;

use super::common::{block_on, parse_extent_arg, prepare_layer, target_extent, target_tile};
use crate::error::CliError;

/// Arguments for the `resolve` command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Layer id, as in the `[layer.<id>]` config section
    #[arg(long)]
    pub layer: String,

    /// Tile extent as W,E,S,N in the layer's projection
    #[arg(long, value_parser = parse_extent_arg, allow_hyphen_values = true)]
    pub extent: [f64; 4],

    /// Tile level of detail
    #[arg(long)]
    pub level: u32,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs, config: &ConfigFile) -> Result<(), CliError> {
    block_on(async {
        let (provider, layer) = prepare_layer(config, &args.layer).await?;
        let mut tile = target_tile(target_extent(&layer, args.extent)?, args.level);

        let resolution = provider.resolve_color_texture(&mut tile, &layer).await?;
        let Some(texture) = resolution.into_texture() else {
            println!("{}", style("Nothing to resolve").yellow());
            return Ok(());
        };

        println!("{} {}", style("Resolved").green().bold(), tile);
        if let Some(file) = tile.binding(layer.id()).and_then(|b| b.source_file.as_deref()) {
            println!("  image:  {}", file);
        }
        println!(
            "  size:   {}x{}",
            texture.raw.width(),
            texture.raw.height()
        );
        println!("  extent: {}", texture.extent);
        println!("  pitch:  {}", texture.pitch);
        Ok(())
    })
}
