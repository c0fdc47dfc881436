//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use staticlayer::config::ConfigFileError;
use staticlayer::TextureError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read or parsed
    Config(ConfigFileError),
    /// Layer id not present in the configuration
    UnknownLayer(String),
    /// Malformed command-line argument
    InvalidArgument(String),
    /// Failed to set up the async runtime
    Runtime(std::io::Error),
    /// Layer setup, selection or resolution failed
    Texture(TextureError),
    /// Failed to serialize output
    Output(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("{} {}", console::style("Error:").red().bold(), self);

        if let CliError::Texture(TextureError::Configuration(_)) = self {
            eprintln!();
            eprintln!("Each [layer.<id>] section needs:");
            eprintln!("  extent = west, east, south, north");
            eprintln!("  url    = http://host/path/metadata.json");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Failed to load configuration: {}", e),
            CliError::UnknownLayer(id) => write!(f, "No layer '{}' in configuration", id),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Runtime(e) => write!(f, "Failed to start runtime: {}", e),
            CliError::Texture(e) => write!(f, "{}", e),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            CliError::Texture(e) => Some(e),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<TextureError> for CliError {
    fn from(e: TextureError) -> Self {
        CliError::Texture(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}
