//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};

/// License Gate CLI - Inspect license switches of a build.
#[derive(Debug, Parser)]
#[command(name = "license-gate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LICENSE_GATE_CONFIG")]
    pub config: Option<String>,

    #[command(flatten)]
    pub properties: PropertyArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where property values come from.
#[derive(Debug, Default, Args)]
pub struct PropertyArgs {
    /// Composite parameters string, e.g. "-Dlicense.skip=false -Dmode=strict"
    #[arg(long, global = true, env = "MAVEN_LICENSE_PARAMETERS", allow_hyphen_values = true)]
    pub params: Option<String>,

    /// Project property (key=value), repeatable
    #[arg(short = 'P', long = "property", global = true, value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Root project property (key=value), repeatable
    #[arg(short = 'R', long = "root-property", global = true, value_name = "KEY=VALUE")]
    pub root_properties: Vec<String>,

    /// TOML file of root project properties
    #[arg(long, global = true)]
    pub properties_file: Option<String>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the value of a key from the composite parameters
    Get(GetArgs),

    /// Check whether a flag is effectively switched off
    IsFalse(IsFalseArgs),

    /// List every definition of the composite parameters
    List,

    /// Show the resolved license settings
    Settings,

    /// Parse a dependency coordinate
    Coordinate(CoordinateArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the get command.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Parameter key (without the -D prefix)
    pub key: String,
}

/// Arguments for the is-false command.
#[derive(Debug, Parser)]
pub struct IsFalseArgs {
    /// Flag name
    pub key: String,

    /// Only an explicit `false` counts; `null` and unset flags do not
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the coordinate command.
#[derive(Debug, Parser)]
pub struct CoordinateArgs {
    /// Coordinate in group:artifact:version[:classifier][@extension] notation
    pub notation: String,

    /// Exclude rule (group:artifact), repeatable
    #[arg(short, long = "exclude", value_name = "GROUP:ARTIFACT")]
    pub excludes: Vec<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
