//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use license_gate_domain::ArtifactGav;
use license_gate_params::{LicenseSettings, MavenParameter};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a single parameter lookup.
    pub fn format_lookup(&self, key: &str, value: Option<&str>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "key": key,
                "value": value,
            }))?),
            OutputFormat::Table => match value {
                Some(value) => Ok(self.table(["Key", "Value"], [[key, value]])),
                None => Ok(self.warning(&format!("'{}' is not defined", key))),
            },
            OutputFormat::Quiet => Ok(value.unwrap_or_default().to_string()),
        }
    }

    /// Format a false-predicate verdict.
    pub fn format_verdict(&self, key: &str, strict: bool, verdict: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "key": key,
                "strict": strict,
                "is_false": verdict,
            }))?),
            OutputFormat::Table => {
                let message = format!("'{}' is false: {}", key, verdict);
                Ok(if verdict {
                    self.colorize(&message, "yellow")
                } else {
                    self.colorize(&message, "green")
                })
            }
            OutputFormat::Quiet => Ok(verdict.to_string()),
        }
    }

    /// Format the definitions of the composite parameters.
    pub fn format_parameters(&self, parameters: &[MavenParameter]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = parameters
                    .iter()
                    .map(|p| serde_json::json!({ "key": p.key, "value": p.value }))
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => {
                if parameters.is_empty() {
                    return Ok(self.colorize("No parameters defined.", "yellow"));
                }
                Ok(self.table(
                    ["Key", "Value"],
                    parameters.iter().map(|p| [p.key.as_str(), p.value.as_str()]),
                ))
            }
            OutputFormat::Quiet => Ok(parameters
                .iter()
                .map(|p| format!("{}={}", p.key, p.value))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format resolved license settings.
    pub fn format_settings(&self, settings: &LicenseSettings) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "skip": settings.skip,
                "supported_groups": settings.supported_groups,
            }))?),
            OutputFormat::Table => {
                let skip = settings.skip.to_string();
                let groups = if settings.supported_groups.is_empty() {
                    "-".to_string()
                } else {
                    settings.supported_groups.join("\n")
                };
                Ok(self.table(
                    ["Setting", "Value"],
                    [["skip", skip.as_str()], ["supported groups", groups.as_str()]],
                ))
            }
            OutputFormat::Quiet => Ok(format!(
                "skip={}\nsupported-groups={}",
                settings.skip,
                settings.supported_groups.join(",")
            )),
        }
    }

    /// Format a parsed dependency coordinate.
    pub fn format_coordinate(&self, gav: &ArtifactGav) -> Result<String> {
        let excludes: Vec<String> = gav.exclude_rules().iter().map(ToString::to_string).collect();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "group": gav.group(),
                "artifact": gav.artifact(),
                "version": gav.version(),
                "classifier": gav.classifier(),
                "extension": gav.extension(),
                "exclude_rules": excludes,
            }))?),
            OutputFormat::Table => {
                let excludes = if excludes.is_empty() {
                    "-".to_string()
                } else {
                    excludes.join("\n")
                };
                Ok(self.table(
                    ["Field", "Value"],
                    [
                        ["group", gav.group()],
                        ["artifact", gav.artifact()],
                        ["version", gav.version()],
                        ["classifier", gav.classifier().unwrap_or("-")],
                        ["extension", gav.extension().unwrap_or("-")],
                        ["excludes", excludes.as_str()],
                    ],
                ))
            }
            OutputFormat::Quiet => Ok(gav.to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn table<'a, R, I>(&self, header: [&str; 2], rows: I) -> String
    where
        R: IntoIterator<Item = &'a str>,
        I: IntoIterator<Item = R>,
    {
        let mut builder = Builder::default();
        builder.push_record(header);
        for row in rows {
            builder.push_record(row);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
