//! User configuration.
//!
//! Layers, HTTP and logging settings are read from an INI file, by default
//! `~/.staticlayer/config.ini`:
//!
//! ```ini
//! [http]
//! timeout_secs = 30
//!
//! [logging]
//! directory = ~/.staticlayer/logs
//!
//! [layer.ortho]
//! projection = EPSG:2154
//! extent = 0, 10, 0, 10
//! url = https://host/ortho/metadata.json
//! ```
//!
//! Extents are written `west, east, south, north`. A layer without an
//! extent parses fine but is rejected when it is preprocessed.
//!
//! ```
//! use staticlayer::config::ConfigFile;
//!
//! let config = ConfigFile::parse("[layer.ortho]\nurl = http://h/metadata.json\n").unwrap();
//! assert_eq!(config.layers[0].id, "ortho");
//! ```

mod file;
mod parser;

pub use file::{
    config_directory, config_file_path, ConfigFile, ConfigFileError, HttpSettings,
    LoggingSettings, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE,
};
pub use parser::parse_bounds;
