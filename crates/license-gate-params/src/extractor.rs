//! Extract single values from the composite license parameters property

use crate::parser::{self, MavenParameter};
use license_gate_domain::PropertyStore;
use tracing::debug;

/// Name of the composite property holding `-Dkey=value` definitions
pub const MAVEN_LICENSE_PARAMETERS: &str = "maven-license-parameters";

/// Look up `key` in the `maven-license-parameters` property of `store`
///
/// Returns `None` when the composite property is unset or has no definition
/// for `key`.
///
/// # Examples
///
/// ```
/// use license_gate_params::{license_parameter, MapPropertyStore, MAVEN_LICENSE_PARAMETERS};
///
/// let store = MapPropertyStore::new()
///     .with_property(MAVEN_LICENSE_PARAMETERS, "'-Dlicense.skip=true -Dmode=strict'");
///
/// assert_eq!(license_parameter(&store, "mode").as_deref(), Some("strict"));
/// assert_eq!(license_parameter(&store, "other"), None);
/// ```
pub fn license_parameter<S>(store: &S, key: &str) -> Option<String>
where
    S: PropertyStore + ?Sized,
{
    license_parameter_in(store, MAVEN_LICENSE_PARAMETERS, key)
}

/// Look up `key` in an arbitrary composite property of `store`
pub fn license_parameter_in<S>(store: &S, composite_property: &str, key: &str) -> Option<String>
where
    S: PropertyStore + ?Sized,
{
    let raw = store.find_property(composite_property).as_text()?;
    let value = parser::find_parameter(&raw, key).map(str::to_string);

    debug!(
        "Composite property '{}' lookup for '{}': {:?}",
        composite_property, key, value
    );
    value
}

/// List every definition of the composite property, in declaration order
///
/// An unset composite property yields an empty list.
pub fn license_parameters_in<S>(store: &S, composite_property: &str) -> Vec<MavenParameter>
where
    S: PropertyStore + ?Sized,
{
    store
        .find_property(composite_property)
        .as_text()
        .map(|raw| parser::parse_parameters(&raw))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapPropertyStore;

    fn store_with(raw: &str) -> MapPropertyStore {
        MapPropertyStore::new().with_property(MAVEN_LICENSE_PARAMETERS, raw)
    }

    #[test]
    fn test_get_license_parameters_property() {
        let store = store_with("-Dparameter1=value1 -Dparameter2=value2 -Dparameter3=value3");

        assert_eq!(license_parameter(&store, "parameter1").as_deref(), Some("value1"));
        assert_eq!(license_parameter(&store, "parameter2").as_deref(), Some("value2"));
        assert_eq!(license_parameter(&store, "parameter3").as_deref(), Some("value3"));
    }

    #[test]
    fn test_single_and_double_quoted_parameters() {
        for raw in [
            "'-Dparameter1=value1 -Dparameter2=value2'",
            "\"-Dparameter1=value1 -Dparameter2=value2\"",
        ] {
            let store = store_with(raw);
            assert_eq!(license_parameter(&store, "parameter1").as_deref(), Some("value1"));
            assert_eq!(license_parameter(&store, "parameter2").as_deref(), Some("value2"));
        }
    }

    #[test]
    fn test_missing_key() {
        let store = store_with("-Dparameter1=value1 -Dparameter2=value2");
        assert_eq!(license_parameter(&store, "nonExistentParameter"), None);
    }

    #[test]
    fn test_parameters_not_set() {
        let store = MapPropertyStore::new().with_property("parameter", "value");
        assert_eq!(license_parameter(&store, "parameter"), None);
        assert!(license_parameters_in(&store, MAVEN_LICENSE_PARAMETERS).is_empty());
    }

    #[test]
    fn test_composite_property_is_read_from_store_not_root() {
        let root = store_with("-Dflag=false");
        let store = MapPropertyStore::new().with_root(root);

        assert_eq!(license_parameter(&store, "flag"), None);
    }

    #[test]
    fn test_non_text_composite_uses_string_form() {
        let store = MapPropertyStore::new().with_property(MAVEN_LICENSE_PARAMETERS, true);
        assert_eq!(license_parameter(&store, "true"), None);
    }

    #[test]
    fn test_custom_composite_property() {
        let store = MapPropertyStore::new().with_property("gradle-license-parameters", "-Dx=1");

        assert_eq!(
            license_parameter_in(&store, "gradle-license-parameters", "x").as_deref(),
            Some("1")
        );
        assert_eq!(license_parameter(&store, "x"), None);
    }

    #[test]
    fn test_list_parameters() {
        let store = store_with("-Da=1 -Db=2");
        let keys: Vec<String> = license_parameters_in(&store, MAVEN_LICENSE_PARAMETERS)
            .into_iter()
            .map(|p| p.key)
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
