//! Artifact module - dependency identities used for license reporting
//!
//! Both types are immutable value objects with structural equality, so they
//! can be used directly as `HashMap`/`HashSet` keys when deduplicating the
//! resolved dependencies of a build.

use std::fmt;
use std::str::FromStr;

/// A group/artifact pair marking a transitive dependency to omit
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExcludeRule {
    group: String,
    artifact: String,
}

impl ExcludeRule {
    /// Create a new exclude rule
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Group of the excluded dependency
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Artifact of the excluded dependency
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// Check whether this rule excludes the given dependency
    pub fn matches(&self, group: &str, artifact: &str) -> bool {
        self.group == group && self.artifact == artifact
    }
}

impl fmt::Display for ExcludeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// Parses `group:artifact`
impl FromStr for ExcludeRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split(':').collect::<Vec<_>>().as_slice() {
            [group, artifact] if !group.is_empty() && !artifact.is_empty() => {
                Ok(Self::new(*group, *artifact))
            }
            _ => Err(format!(
                "Invalid exclude rule '{}': expected group:artifact",
                s
            )),
        }
    }
}

/// Artifact coordinate: group, artifact, version plus optional qualifiers
///
/// Constructed once per resolved dependency. The `with_*` methods consume the
/// value and return a new one, so an `ArtifactGav` is never changed in place.
///
/// # Examples
///
/// ```
/// use license_gate_domain::{ArtifactGav, ExcludeRule};
///
/// let gav = ArtifactGav::new("org.slf4j", "slf4j-api", "2.0.3")
///     .with_extension("jar")
///     .with_exclude_rule(ExcludeRule::new("org.example", "unwanted"));
///
/// assert_eq!(gav.to_string(), "org.slf4j:slf4j-api:2.0.3@jar");
/// assert!(gav.excludes("org.example", "unwanted"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactGav {
    group: String,
    artifact: String,
    version: String,
    classifier: Option<String>,
    extension: Option<String>,
    exclude_rules: Vec<ExcludeRule>,
}

impl ArtifactGav {
    /// Create a coordinate without classifier, extension or exclude rules
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            classifier: None,
            extension: None,
            exclude_rules: Vec::new(),
        }
    }

    /// Set the classifier
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Set the extension
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Append an exclude rule; order is preserved and is part of equality
    #[must_use]
    pub fn with_exclude_rule(mut self, rule: ExcludeRule) -> Self {
        self.exclude_rules.push(rule);
        self
    }

    /// Replace all exclude rules
    #[must_use]
    pub fn with_exclude_rules(mut self, rules: Vec<ExcludeRule>) -> Self {
        self.exclude_rules = rules;
        self
    }

    /// Group id
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Artifact id
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// Version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Classifier, if any
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Extension, if any
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Exclude rules in declaration order
    pub fn exclude_rules(&self) -> &[ExcludeRule] {
        &self.exclude_rules
    }

    /// Check whether any exclude rule omits the given dependency
    pub fn excludes(&self, group: &str, artifact: &str) -> bool {
        self.exclude_rules
            .iter()
            .any(|rule| rule.matches(group, artifact))
    }
}

/// Dependency notation: `group:artifact:version[:classifier][@extension]`
///
/// Exclude rules are not part of the notation.
impl fmt::Display for ArtifactGav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        if let Some(extension) = &self.extension {
            write!(f, "@{}", extension)?;
        }
        Ok(())
    }
}

impl FromStr for ArtifactGav {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coordinates, extension) = match s.split_once('@') {
            Some((_, "")) => {
                return Err(format!("Invalid coordinate '{}': empty extension", s));
            }
            Some((coordinates, extension)) => (coordinates, Some(extension)),
            None => (s, None),
        };

        let parts: Vec<&str> = coordinates.split(':').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(format!("Invalid coordinate '{}': empty component", s));
        }

        let gav = match parts.as_slice() {
            [group, artifact, version] => Self::new(*group, *artifact, *version),
            [group, artifact, version, classifier] => {
                Self::new(*group, *artifact, *version).with_classifier(*classifier)
            }
            _ => {
                return Err(format!(
                    "Invalid coordinate '{}': expected group:artifact:version[:classifier][@extension]",
                    s
                ));
            }
        };

        Ok(match extension {
            Some(extension) => gav.with_extension(extension),
            None => gav,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn sample() -> ArtifactGav {
        ArtifactGav::new("com.auth0", "jwks-rsa", "0.22.0")
            .with_classifier("sources")
            .with_extension("jar")
            .with_exclude_rule(ExcludeRule::new("com.google.guava", "guava"))
            .with_exclude_rule(ExcludeRule::new("commons-io", "commons-io"))
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(sample(), sample());
        assert_eq!(hash_of(&sample()), hash_of(&sample()));
    }

    #[test]
    fn test_each_field_breaks_equality() {
        let base = sample();
        let variants = vec![
            ArtifactGav { group: "other".into(), ..base.clone() },
            ArtifactGav { artifact: "other".into(), ..base.clone() },
            ArtifactGav { version: "0.22.1".into(), ..base.clone() },
            ArtifactGav { classifier: None, ..base.clone() },
            ArtifactGav { extension: Some("pom".into()), ..base.clone() },
            ArtifactGav { exclude_rules: Vec::new(), ..base.clone() },
        ];

        for variant in variants {
            assert_ne!(base, variant, "{} should differ", variant);
        }
    }

    #[test]
    fn test_exclude_rule_order_matters() {
        let a = ArtifactGav::new("g", "a", "1")
            .with_exclude_rule(ExcludeRule::new("x", "1"))
            .with_exclude_rule(ExcludeRule::new("y", "2"));
        let b = ArtifactGav::new("g", "a", "1")
            .with_exclude_rule(ExcludeRule::new("y", "2"))
            .with_exclude_rule(ExcludeRule::new("x", "1"));

        assert_ne!(a, b);
    }

    #[test]
    fn test_deduplication_in_set() {
        let mut seen = HashSet::new();
        assert!(seen.insert(sample()));
        assert!(!seen.insert(sample()));
        assert!(seen.insert(ArtifactGav::new("com.auth0", "jwks-rsa", "0.22.0")));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_excludes() {
        let gav = sample();
        assert!(gav.excludes("com.google.guava", "guava"));
        assert!(!gav.excludes("com.google.guava", "failureaccess"));
        assert!(!gav.excludes("guava", "com.google.guava"));
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "com.auth0:jwks-rsa:0.22.0:sources@jar");
        assert_eq!(ArtifactGav::new("g", "a", "1").to_string(), "g:a:1");
        assert_eq!(ExcludeRule::new("g", "a").to_string(), "g:a");
    }

    #[test]
    fn test_parse_notation() {
        let gav: ArtifactGav = "org.slf4j:slf4j-api:2.0.3".parse().unwrap();
        assert_eq!(gav.group(), "org.slf4j");
        assert_eq!(gav.artifact(), "slf4j-api");
        assert_eq!(gav.version(), "2.0.3");
        assert_eq!(gav.classifier(), None);
        assert_eq!(gav.extension(), None);

        let gav: ArtifactGav = "g:a:1:sources@zip".parse().unwrap();
        assert_eq!(gav.classifier(), Some("sources"));
        assert_eq!(gav.extension(), Some("zip"));
    }

    #[test]
    fn test_parse_invalid_notation() {
        assert!("g:a".parse::<ArtifactGav>().is_err());
        assert!("g::1".parse::<ArtifactGav>().is_err());
        assert!("g:a:1@".parse::<ArtifactGav>().is_err());
        assert!("g:a:1:c:extra".parse::<ArtifactGav>().is_err());
        assert!("".parse::<ArtifactGav>().is_err());
    }

    #[test]
    fn test_parse_exclude_rule() {
        let rule: ExcludeRule = "com.google.guava:guava".parse().unwrap();
        assert_eq!(rule.group(), "com.google.guava");
        assert_eq!(rule.artifact(), "guava");

        assert!("guava".parse::<ExcludeRule>().is_err());
        assert!(":guava".parse::<ExcludeRule>().is_err());
        assert!("a:b:c".parse::<ExcludeRule>().is_err());
    }
}
