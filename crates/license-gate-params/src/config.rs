//! Configuration for parameter lookups

use crate::error::ParamsError;
use crate::extractor::MAVEN_LICENSE_PARAMETERS;
use serde::{Deserialize, Serialize};

/// Names of the properties consulted by the params layer
///
/// # Examples
///
/// ```
/// use license_gate_params::ParamsConfig;
///
/// let config = ParamsConfig::default();
/// assert_eq!(config.composite_property, "maven-license-parameters");
/// assert_eq!(config.skip_property, "license.skip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    /// Property holding the `-Dkey=value` definitions
    pub composite_property: String,

    /// Flag that disables license processing unless it reads as false
    pub skip_property: String,

    /// Comma-separated list of groups treated as supported
    pub supported_groups_property: String,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            composite_property: MAVEN_LICENSE_PARAMETERS.to_string(),
            skip_property: "license.skip".to_string(),
            supported_groups_property: "supported-groups".to_string(),
        }
    }
}

impl ParamsConfig {
    /// Validate the configuration
    ///
    /// # Errors
    /// Returns [`ParamsError::Config`] when a property name is empty or
    /// contains whitespace (it could never match a `-D` token).
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (field, name) in [
            ("composite_property", &self.composite_property),
            ("skip_property", &self.skip_property),
            ("supported_groups_property", &self.supported_groups_property),
        ] {
            if name.is_empty() {
                return Err(ParamsError::Config(format!("{} must not be empty", field)));
            }
            if name.chars().any(char::is_whitespace) {
                return Err(ParamsError::Config(format!(
                    "{} must not contain whitespace: '{}'",
                    field, name
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string; missing keys take defaults
    pub fn from_toml(toml_str: &str) -> Result<Self, ParamsError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ParamsError> {
        toml::to_string_pretty(self)
            .map_err(|e| ParamsError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
