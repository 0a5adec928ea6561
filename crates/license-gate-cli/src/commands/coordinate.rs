//! Coordinate command implementation.

use crate::cli::CoordinateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use license_gate_domain::{ArtifactGav, ExcludeRule};

/// Execute the coordinate command.
pub fn execute_coordinate(args: CoordinateArgs, formatter: &Formatter) -> Result<()> {
    let gav = parse_coordinate(&args)?;
    println!("{}", formatter.format_coordinate(&gav)?);
    Ok(())
}

fn parse_coordinate(args: &CoordinateArgs) -> Result<ArtifactGav> {
    let rules = args
        .excludes
        .iter()
        .map(|rule| rule.parse::<ExcludeRule>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(CliError::InvalidInput)?;

    let gav: ArtifactGav = args.notation.parse().map_err(CliError::InvalidInput)?;
    Ok(gav.with_exclude_rules(rules))
}
