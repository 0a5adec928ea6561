//! License Gate Params
//!
//! Reads license switches from a project's properties.
//!
//! # Overview
//!
//! License processing is configured in two places: a composite property,
//! `maven-license-parameters`, carrying Maven-style `-Dkey=value` definitions,
//! and ordinary project properties. This crate finds a key in the composite
//! property and decides whether a flag is effectively switched off.
//!
//! # Architecture
//!
//! ```text
//! raw string → tokens → matched value → false-like verdict
//!                                ↑
//!               root project property (fallback)
//! ```
//!
//! # Key Features
//!
//! - **Parameter lookup**: first `-D<key>=` token wins, values may contain `=`
//! - **Quote handling**: one matched pair of `'` or `"` around the string is ignored
//! - **Precedence**: a composite definition always beats the plain property
//! - **Settings view**: `license.skip` and `supported-groups` resolved in one call
//!
//! # Example Usage
//!
//! ```
//! use license_gate_params::{
//!     is_false_like, license_parameter, MapPropertyStore, MAVEN_LICENSE_PARAMETERS,
//! };
//!
//! let store = MapPropertyStore::new()
//!     .with_property(MAVEN_LICENSE_PARAMETERS, "\"-Dlicense.skip=false -Dmode=a=b\"")
//!     .with_property("license.skip", true);
//!
//! assert_eq!(license_parameter(&store, "mode").as_deref(), Some("a=b"));
//! assert!(is_false_like(&store, "license.skip"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod resolver;
mod settings;
mod store;

pub use config::ParamsConfig;
pub use error::ParamsError;
pub use extractor::{
    license_parameter, license_parameter_in, license_parameters_in, MAVEN_LICENSE_PARAMETERS,
};
pub use parser::{find_parameter, parse_parameters, strip_quotes, MavenParameter};
pub use resolver::{is_false_like, is_false_like_in, property_is_false, property_is_false_in};
pub use settings::LicenseSettings;
pub use store::MapPropertyStore;

pub use license_gate_domain::{PropertyStore, PropertyValue};
