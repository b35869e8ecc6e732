//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod config;
pub mod context;
pub mod enums;
pub mod shape;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// gdmodel - inspect GuardDuty API shapes and enumerations
#[derive(Parser, Debug)]
#[command(name = "gdmodel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json, yaml)
    #[arg(
        long,
        global = true,
        env = "GDMODEL_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GDMODEL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GDMODEL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect enumerations and validate canonical values
    #[command(subcommand)]
    Enum(EnumCommands),

    /// Inspect shapes and parse wire payloads
    #[command(subcommand)]
    Shape(ShapeCommands),

    /// View or update preferences
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   gdmodel completion bash > /etc/bash_completion.d/gdmodel
  zsh:    gdmodel completion zsh > \"${fpath[1]}/_gdmodel\"
  fish:   gdmodel completion fish > ~/.config/fish/completions/gdmodel.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Enumeration subcommands
#[derive(Subcommand, Debug)]
pub enum EnumCommands {
    /// List every enumeration with its canonical values
    List,

    /// Show the canonical values of one enumeration
    Values {
        /// Enumeration name (e.g. ThreatIntelSetFormat)
        name: String,
    },

    /// Validate a value against an enumeration
    Parse {
        /// Enumeration name (e.g. ThreatIntelSetFormat)
        name: String,

        /// Value to look up; matching is exact and case-sensitive
        value: String,
    },
}

/// Shape subcommands
#[derive(Subcommand, Debug)]
pub enum ShapeCommands {
    /// List every shape with its members
    List,

    /// Parse a JSON payload and show its rendering and structural hash
    Show {
        /// Shape name as used by the API (e.g. CreateIPSetResult)
        name: String,

        /// Payload file; reads stdin when omitted
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,
    },

    /// Compare two JSON payloads of the same shape
    Compare {
        /// Shape name as used by the API
        name: String,

        /// First payload file
        left: PathBuf,

        /// Second payload file
        right: PathBuf,
    },
}

/// Preference subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the stored preferences
    Show,

    /// Set the default output format
    SetFormat {
        /// Format to use when --format is not given
        #[arg(value_enum)]
        format: OutputFormat,
    },
}
