//! `catalog` command: load a layer and list its images.

use clap::Args;
use console::style;
use staticlayer::config::ConfigFile;

use super::common::{block_on, prepare_layer};
use crate::error::CliError;

/// Arguments for the `catalog` command.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Layer id, as in the `[layer.<id>]` config section
    #[arg(long)]
    pub layer: String,

    /// Print the entries as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, config: &ConfigFile) -> Result<(), CliError> {
    let (_, layer) = block_on(prepare_layer(config, &args.layer))?;
    let catalog = layer
        .catalog()
        .ok_or(CliError::Texture(staticlayer::SelectionError::NoCatalog.into()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    println!(
        "{} {} ({} images)",
        style("Layer").bold(),
        layer.id(),
        catalog.len()
    );
    for entry in catalog {
        let (width, height) = entry.dimensions();
        println!(
            "  {:<32} {}  {}x{}",
            entry.image(),
            entry.extent(),
            width,
            height
        );
    }
    Ok(())
}
