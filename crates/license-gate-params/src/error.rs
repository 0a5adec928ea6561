//! Error types for the params layer
//!
//! Parameter lookups never fail; these errors come from configuration and
//! property loading only.

use thiserror::Error;

/// Errors that can occur while loading configuration or properties
#[derive(Error, Debug)]
pub enum ParamsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A property entry that cannot be represented
    #[error("Invalid property: {0}")]
    InvalidProperty(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
