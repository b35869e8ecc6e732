//! Global CLI options shared across all commands

use guardduty_model::config::Config;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// Output format: CLI flag > environment variable > config file > `pretty`.
/// This struct captures the CLI/env layer; the config layer is applied by
/// [`GlobalOptions::resolve_format`].
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format from `--format` / `GDMODEL_FORMAT`
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.gdmodel/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Pick the effective output format.
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }

        match config.preferences.format.as_deref() {
            Some(value) => OutputFormat::from_config(value).unwrap_or_else(|| {
                log::warn!("Ignoring unknown format '{}' in config", value);
                OutputFormat::default()
            }),
            None => OutputFormat::default(),
        }
    }
}
