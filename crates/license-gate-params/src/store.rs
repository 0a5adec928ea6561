//! In-memory property store

use crate::error::ParamsError;
use license_gate_domain::{PropertyStore, PropertyValue};
use std::collections::HashMap;
use tracing::warn;

/// Property store backed by a `HashMap`, with an optional root scope
///
/// Without a root scope the store is its own root, which is how a
/// single-project build behaves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapPropertyStore {
    properties: HashMap<String, PropertyValue>,
    root: Option<Box<MapPropertyStore>>,
}

impl MapPropertyStore {
    /// Create an empty store with no root scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, builder style
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set the root scope used for fallback lookups
    #[must_use]
    pub fn with_root(mut self, root: MapPropertyStore) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    /// Insert or replace a property
    ///
    /// Inserting [`PropertyValue::Absent`] removes the entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        let name = name.into();
        match value.into() {
            PropertyValue::Absent => {
                self.properties.remove(&name);
            }
            value => {
                self.properties.insert(name, value);
            }
        }
    }

    /// Number of properties in this scope (the root scope is not counted)
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether this scope holds no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Whether a separate root scope is attached
    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    /// Load a flat TOML table of properties
    ///
    /// Booleans become [`PropertyValue::Bool`]; strings, integers, floats and
    /// datetimes become [`PropertyValue::Text`]. Arrays and tables are
    /// rejected since a project property is a single value.
    ///
    /// # Errors
    /// Returns [`ParamsError::Toml`] on malformed TOML and
    /// [`ParamsError::InvalidProperty`] on nested values.
    pub fn from_toml(toml_str: &str) -> Result<Self, ParamsError> {
        let table: toml::Table = toml::from_str(toml_str)?;
        let mut store = Self::new();

        for (name, value) in table {
            let value = match value {
                toml::Value::Boolean(b) => PropertyValue::Bool(b),
                toml::Value::String(s) => PropertyValue::Text(s),
                toml::Value::Integer(i) => PropertyValue::Text(i.to_string()),
                toml::Value::Float(f) => PropertyValue::Text(f.to_string()),
                toml::Value::Datetime(d) => PropertyValue::Text(d.to_string()),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    warn!("Rejecting nested value for property '{}'", name);
                    return Err(ParamsError::InvalidProperty(format!(
                        "'{}' must be a single value, not an array or table",
                        name
                    )));
                }
            };
            store.insert(name, value);
        }

        Ok(store)
    }
}

impl PropertyStore for MapPropertyStore {
    fn find_property(&self, name: &str) -> PropertyValue {
        self.properties.get(name).cloned().unwrap_or_default()
    }

    fn root(&self) -> &dyn PropertyStore {
        match &self.root {
            Some(root) => &**root,
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_property() {
        let store = MapPropertyStore::new()
            .with_property("a", "1")
            .with_property("b", false);

        assert_eq!(store.find_property("a"), PropertyValue::text("1"));
        assert_eq!(store.find_property("b"), PropertyValue::Bool(false));
        assert_eq!(store.find_property("c"), PropertyValue::Absent);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_own_root_when_unset() {
        let store = MapPropertyStore::new().with_property("a", "1");
        assert!(!store.has_root());
        assert_eq!(store.root().find_property("a"), PropertyValue::text("1"));
    }

    #[test]
    fn test_separate_root() {
        let root = MapPropertyStore::new().with_property("a", "root");
        let store = MapPropertyStore::new().with_property("a", "child").with_root(root);

        assert_eq!(store.find_property("a"), PropertyValue::text("child"));
        assert_eq!(store.root().find_property("a"), PropertyValue::text("root"));
    }

    #[test]
    fn test_insert_absent_removes() {
        let mut store = MapPropertyStore::new().with_property("a", "1");
        store.insert("a", PropertyValue::Absent);
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_toml() {
        let store = MapPropertyStore::from_toml(
            r#"
            "license.skip" = false
            supported-groups = "org.example,org.acme"
            retries = 3
            "#,
        )
        .unwrap();

        assert_eq!(store.find_property("license.skip"), PropertyValue::Bool(false));
        assert_eq!(
            store.find_property("supported-groups"),
            PropertyValue::text("org.example,org.acme")
        );
        assert_eq!(store.find_property("retries"), PropertyValue::text("3"));
    }

    #[test]
    fn test_from_toml_rejects_nested() {
        let result = MapPropertyStore::from_toml("groups = [\"a\", \"b\"]");
        assert!(matches!(result, Err(ParamsError::InvalidProperty(_))));

        let result = MapPropertyStore::from_toml("[section]\nkey = 1");
        assert!(matches!(result, Err(ParamsError::InvalidProperty(_))));
    }

    #[test]
    fn test_from_toml_malformed() {
        let result = MapPropertyStore::from_toml("this is = = not toml");
        assert!(matches!(result, Err(ParamsError::Toml(_))));
    }
}
