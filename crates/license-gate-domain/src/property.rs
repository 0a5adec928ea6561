//! Property value module - the dynamically typed entries of a property store

use std::fmt;

/// A single entry looked up from a property store
///
/// Build tools hand properties back untyped: an entry may be missing, may be a
/// boolean set programmatically, or may be the raw text passed with `-P`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PropertyValue {
    /// No entry for the requested name
    #[default]
    Absent,

    /// A boolean entry
    Bool(bool),

    /// A textual entry
    Text(String),
}

impl PropertyValue {
    /// Create a textual value
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text(value.into())
    }

    /// Whether there is no entry
    pub fn is_absent(&self) -> bool {
        matches!(self, PropertyValue::Absent)
    }

    /// Whether there is an entry of any kind
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Get the value as text, or `None` when absent
    ///
    /// # Examples
    ///
    /// ```
    /// use license_gate_domain::PropertyValue;
    ///
    /// assert_eq!(PropertyValue::Bool(false).as_text().as_deref(), Some("false"));
    /// assert_eq!(PropertyValue::Absent.as_text(), None);
    /// ```
    pub fn as_text(&self) -> Option<String> {
        match self {
            PropertyValue::Absent => None,
            PropertyValue::Bool(b) => Some(b.to_string()),
            PropertyValue::Text(s) => Some(s.clone()),
        }
    }
}

/// String form of a value; absent entries render as `null`
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Absent => f.write_str("null"),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PropertyValue::Absent.to_string(), "null");
        assert_eq!(PropertyValue::Bool(true).to_string(), "true");
        assert_eq!(PropertyValue::Bool(false).to_string(), "false");
        assert_eq!(PropertyValue::text("  x ").to_string(), "  x ");
    }

    #[test]
    fn test_presence() {
        assert!(PropertyValue::Absent.is_absent());
        assert!(PropertyValue::Bool(false).is_present());
        assert!(PropertyValue::text("").is_present());
    }

    #[test]
    fn test_from_option() {
        let none: Option<bool> = None;
        assert_eq!(PropertyValue::from(none), PropertyValue::Absent);
        assert_eq!(PropertyValue::from(Some("v")), PropertyValue::text("v"));
        assert_eq!(PropertyValue::from(Some(true)), PropertyValue::Bool(true));
    }

    #[test]
    fn test_default_is_absent() {
        assert_eq!(PropertyValue::default(), PropertyValue::Absent);
    }
}
