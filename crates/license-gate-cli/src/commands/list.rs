//! List command implementation.

use crate::error::Result;
use crate::output::Formatter;
use license_gate_params::{license_parameters_in, ParamsConfig, PropertyStore};

/// Execute the list command.
pub fn execute_list(
    store: &dyn PropertyStore,
    params: &ParamsConfig,
    formatter: &Formatter,
) -> Result<()> {
    let parameters = license_parameters_in(store, &params.composite_property);
    println!("{}", formatter.format_parameters(&parameters)?);
    Ok(())
}
