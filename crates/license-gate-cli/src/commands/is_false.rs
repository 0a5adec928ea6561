//! Is-false command implementation.

use crate::cli::IsFalseArgs;
use crate::error::Result;
use crate::output::Formatter;
use license_gate_params::{is_false_like_in, property_is_false_in, ParamsConfig, PropertyStore};

/// Execute the is-false command.
pub fn execute_is_false(
    args: IsFalseArgs,
    store: &dyn PropertyStore,
    params: &ParamsConfig,
    formatter: &Formatter,
) -> Result<()> {
    let verdict = evaluate(&args, store, params);
    println!("{}", formatter.format_verdict(&args.key, args.strict, verdict)?);
    Ok(())
}

fn evaluate(args: &IsFalseArgs, store: &dyn PropertyStore, params: &ParamsConfig) -> bool {
    if args.strict {
        property_is_false_in(store, &params.composite_property, &args.key)
    } else {
        is_false_like_in(store, &params.composite_property, &args.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use license_gate_params::MapPropertyStore;

    fn args(key: &str, strict: bool) -> IsFalseArgs {
        IsFalseArgs {
            key: key.to_string(),
            strict,
        }
    }

    #[test]
    fn test_unset_flag() {
        let store = MapPropertyStore::new();
        let params = ParamsConfig::default();

        assert!(evaluate(&args("delta", false), &store, &params));
        assert!(!evaluate(&args("delta", true), &store, &params));
    }

    #[test]
    fn test_renamed_composite_property() {
        let params = ParamsConfig {
            composite_property: "gradle-license-parameters".to_string(),
            ..ParamsConfig::default()
        };
        let store = MapPropertyStore::new()
            .with_property("gradle-license-parameters", "-Dflag=true")
            .with_property("flag", false);

        assert!(!evaluate(&args("flag", false), &store, &params));
        assert!(!evaluate(&args("flag", true), &store, &params));
    }
}
