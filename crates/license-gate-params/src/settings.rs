//! License settings derived from project properties

use crate::config::ParamsConfig;
use crate::extractor::license_parameter_in;
use crate::resolver::is_false_like_in;
use license_gate_domain::PropertyStore;
use tracing::debug;

/// Resolved switches that drive license processing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LicenseSettings {
    /// Whether license processing is skipped entirely
    pub skip: bool,

    /// Groups treated as supported (in declaration order, without duplicates)
    pub supported_groups: Vec<String>,
}

impl LicenseSettings {
    /// Resolve settings from a store
    ///
    /// `skip` holds unless the skip flag reads as false; an unset flag does not
    /// skip. Supported groups come from the composite parameters first and the
    /// root project property otherwise.
    pub fn resolve<S>(store: &S, config: &ParamsConfig) -> Self
    where
        S: PropertyStore + ?Sized,
    {
        let skip = !is_false_like_in(store, &config.composite_property, &config.skip_property);

        let raw_groups = license_parameter_in(
            store,
            &config.composite_property,
            &config.supported_groups_property,
        )
        .or_else(|| store.root().find_property(&config.supported_groups_property).as_text());

        let supported_groups = raw_groups.as_deref().map(split_groups).unwrap_or_default();

        debug!(
            "Resolved license settings: skip={}, supported_groups={:?}",
            skip, supported_groups
        );

        Self {
            skip,
            supported_groups,
        }
    }

    /// Whether `group` is one of, or nested under, the supported groups
    ///
    /// `org.acme` supports `org.acme` and `org.acme.tools` but not `org.acmex`.
    pub fn is_supported_group(&self, group: &str) -> bool {
        self.supported_groups.iter().any(|supported| {
            group == supported.as_str()
                || group
                    .strip_prefix(supported.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

fn split_groups(raw: &str) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for group in raw.split(',').map(str::trim).filter(|g| !g.is_empty()) {
        if !groups.iter().any(|existing| existing == group) {
            groups.push(group.to_string());
        }
    }
    groups
}
