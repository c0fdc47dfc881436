//! StaticLayer - static imagery selection for tiled map rendering
//!
//! This library picks, from a static catalog of geo-referenced images, the
//! image that best fits a requested map tile, fetches it, and computes how
//! it should be placed onto the tile.
//!
//! # Overview
//!
//! ```text
//! config.ini ──► LayerConfig ──► Layer ──preprocess──► Layer + Arc<Catalog>
//!                                                            │
//!                          Tile ──► TextureResolver ◄────────┘
//!                                        │ select_best_fit
//!                                        │ fetch + decode
//!                                        ▼
//!                                   Resolution (texture + pitch | NoOp)
//! ```
//!
//! - [`extent`] - bounding rectangles, containment and placement offsets
//! - [`catalog`] - catalog loading and best-fit selection
//! - [`layer`] - layers and image URL derivation
//! - [`tile`] - tiles and their per-layer texture bindings
//! - [`resolver`] - the resolution pipeline and improvement checks
//! - [`provider`] - the facade used by tile schedulers
//! - [`fetch`] - HTTP transport and image decoding
//! - [`config`] / [`logging`] - user configuration and log setup

pub mod catalog;
pub mod config;
pub mod error;
pub mod extent;
pub mod fetch;
pub mod layer;
pub mod logging;
pub mod provider;
pub mod resolver;
pub mod tile;

pub use error::{SelectionError, TextureError};
