//! Command execution context
//!
//! Loads the config file once and resolves the output format so command
//! handlers only deal with their own arguments.

use std::path::PathBuf;

use guardduty_model::Result;
use guardduty_model::config::Config;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Resolved config file location (may not exist yet)
    pub config_path: PathBuf,
    /// Loaded configuration, or the defaults if the file is missing
    pub config: Config,
    /// Effective output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be read or parsed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_or_default(&config_path)?;
        Ok(Self::with_config(opts, config_path, config))
    }

    /// Create a context for a command that rewrites the config file.
    ///
    /// An unparseable file is treated as the defaults so it can be replaced.
    pub fn for_update(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_or_reset(&config_path)?;
        Ok(Self::with_config(opts, config_path, config))
    }

    fn with_config(opts: &GlobalOptions, config_path: PathBuf, config: Config) -> Self {
        let format = opts.resolve_format(&config);
        log::debug!("Using output format {}", format);

        Self {
            config_path,
            config,
            format,
        }
    }
}
