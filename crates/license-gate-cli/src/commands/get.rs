//! Get command implementation.

use crate::cli::GetArgs;
use crate::error::Result;
use crate::output::Formatter;
use license_gate_params::{license_parameter_in, ParamsConfig, PropertyStore};

/// Execute the get command.
pub fn execute_get(
    args: GetArgs,
    store: &dyn PropertyStore,
    params: &ParamsConfig,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render_get(&args, store, params, formatter)?);
    Ok(())
}

fn render_get(
    args: &GetArgs,
    store: &dyn PropertyStore,
    params: &ParamsConfig,
    formatter: &Formatter,
) -> Result<String> {
    let value = license_parameter_in(store, &params.composite_property, &args.key);
    formatter.format_lookup(&args.key, value.as_deref())
}
