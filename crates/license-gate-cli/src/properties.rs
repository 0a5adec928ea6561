//! Build a property store from command-line arguments.

use crate::cli::PropertyArgs;
use crate::error::{CliError, Result};
use license_gate_params::{MapPropertyStore, ParamsConfig};
use std::fs;
use tracing::debug;

/// Build the project store described by the arguments.
///
/// `-P` properties and `--params` land in the project scope. Root-scope
/// properties (`--properties-file`, then `-R` overrides) are attached as a
/// separate root only when at least one is given; otherwise the project is
/// its own root.
pub fn build_store(args: &PropertyArgs, params: &ParamsConfig) -> Result<MapPropertyStore> {
    let mut project = MapPropertyStore::new();
    for entry in &args.properties {
        let (key, value) = split_property(entry)?;
        project.insert(key, value);
    }
    if let Some(raw) = &args.params {
        project.insert(params.composite_property.as_str(), raw.as_str());
    }

    let mut root = match &args.properties_file {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Some(MapPropertyStore::from_toml(&contents)?)
        }
        None => None,
    };
    for entry in &args.root_properties {
        let (key, value) = split_property(entry)?;
        root.get_or_insert_with(MapPropertyStore::new).insert(key, value);
    }

    debug!(
        "Built property store: {} project properties, root scope: {}",
        project.len(),
        root.is_some()
    );

    Ok(match root {
        Some(root) => project.with_root(root),
        None => project,
    })
}

/// Split `key=value` on the first `=`.
fn split_property(entry: &str) -> Result<(&str, &str)> {
    match entry.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(CliError::InvalidInput(format!(
            "Expected KEY=VALUE, got '{}'",
            entry
        ))),
    }
}
