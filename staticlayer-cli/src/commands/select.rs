//! `select` command: show which image best fits an extent.

use clap::Args;
use console::style;
use staticlayer::catalog::select_best_fit;
use staticlayer::config::ConfigFile;
use staticlayer::SelectionError;

use super::common::{block_on, parse_extent_arg, prepare_layer, target_extent};
use crate::error::CliError;

/// Arguments for the `select` command.
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Layer id, as in the `[layer.<id>]` config section
    #[arg(long)]
    pub layer: String,

    /// Target extent as W,E,S,N in the layer's projection
    #[arg(long, value_parser = parse_extent_arg, allow_hyphen_values = true)]
    pub extent: [f64; 4],
}

/// Run the select command.
///
/// An extent that no image covers is reported on stdout, not as an error.
pub fn run(args: SelectArgs, config: &ConfigFile) -> Result<(), CliError> {
    let (_, layer) = block_on(prepare_layer(config, &args.layer))?;
    let target = target_extent(&layer, args.extent)?;
    let catalog = layer
        .catalog()
        .ok_or(CliError::Texture(SelectionError::NoCatalog.into()))?;

    match select_best_fit(catalog, &target) {
        Some(entry) => {
            println!("{} {}", style("Selected").green().bold(), entry.image());
            println!("  extent: {}", entry.extent());
            println!("  url:    {}", layer.image_url(entry.image())?);
        }
        None => println!("{}", style(SelectionError::NoCoveringImage).yellow()),
    }
    Ok(())
}
