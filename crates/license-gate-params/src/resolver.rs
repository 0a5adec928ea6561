//! Resolve whether a license flag is effectively switched off
//!
//! Precedence, highest first:
//!
//! 1. the definition inside the composite `maven-license-parameters` property,
//! 2. the plain property of the same name on the root store,
//! 3. the default for an unset flag.
//!
//! A composite definition is authoritative even when the plain property says
//! otherwise; the two are never combined.

use crate::extractor::{license_parameter_in, MAVEN_LICENSE_PARAMETERS};
use license_gate_domain::{PropertyStore, PropertyValue};
use tracing::debug;

/// Whether `key` reads as false, `null`, or is not set anywhere
///
/// # Examples
///
/// ```
/// use license_gate_params::{is_false_like, MapPropertyStore, MAVEN_LICENSE_PARAMETERS};
///
/// let store = MapPropertyStore::new()
///     .with_property(MAVEN_LICENSE_PARAMETERS, "-Dalpha=false -Dbeta=true")
///     .with_property("alpha", true)
///     .with_property("beta", false);
///
/// assert!(is_false_like(&store, "alpha"));
/// assert!(!is_false_like(&store, "beta"));
/// assert!(is_false_like(&store, "unset"));
/// ```
pub fn is_false_like<S>(store: &S, key: &str) -> bool
where
    S: PropertyStore + ?Sized,
{
    is_false_like_in(store, MAVEN_LICENSE_PARAMETERS, key)
}

/// [`is_false_like`] against an arbitrary composite property
pub fn is_false_like_in<S>(store: &S, composite_property: &str, key: &str) -> bool
where
    S: PropertyStore + ?Sized,
{
    if let Some(value) = license_parameter_in(store, composite_property, key) {
        debug!("'{}' resolved from composite parameters: '{}'", key, value);
        return is_false_or_null(&value);
    }

    match store.root().find_property(key) {
        PropertyValue::Absent => {
            debug!("'{}' is not set, treating as false", key);
            true
        }
        value => {
            debug!("'{}' resolved from project property: {}", key, value);
            is_false_or_null(&value.to_string())
        }
    }
}

/// Whether `key` is explicitly set to false
///
/// Same precedence as [`is_false_like`], but only a `false` value counts:
/// `null` text and unset flags are not false.
pub fn property_is_false<S>(store: &S, key: &str) -> bool
where
    S: PropertyStore + ?Sized,
{
    property_is_false_in(store, MAVEN_LICENSE_PARAMETERS, key)
}

/// [`property_is_false`] against an arbitrary composite property
pub fn property_is_false_in<S>(store: &S, composite_property: &str, key: &str) -> bool
where
    S: PropertyStore + ?Sized,
{
    if let Some(value) = license_parameter_in(store, composite_property, key) {
        return is_false(&value);
    }

    match store.root().find_property(key) {
        PropertyValue::Bool(value) => !value,
        PropertyValue::Text(value) => is_false(&value),
        PropertyValue::Absent => false,
    }
}

fn is_false(value: &str) -> bool {
    value.eq_ignore_ascii_case("false")
}

fn is_false_or_null(value: &str) -> bool {
    is_false(value) || value.eq_ignore_ascii_case("null")
}
