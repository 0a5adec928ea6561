//! Settings command implementation.

use crate::error::Result;
use crate::output::Formatter;
use license_gate_params::{LicenseSettings, ParamsConfig, PropertyStore};

/// Execute the settings command.
pub fn execute_settings(
    store: &dyn PropertyStore,
    params: &ParamsConfig,
    formatter: &Formatter,
) -> Result<()> {
    let settings = LicenseSettings::resolve(store, params);
    println!("{}", formatter.format_settings(&settings)?);
    Ok(())
}
