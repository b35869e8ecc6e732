//! Preference command implementations

use colored::Colorize;

use guardduty_model::Result;

use crate::cli::{CommandContext, OutputFormat};
use crate::output::{format_yaml, json};

/// Run the config show command
pub fn show(ctx: &CommandContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Pretty | OutputFormat::Table => {
            let stored = ctx.config.preferences.format.as_deref().unwrap_or("(not set)");
            println!("format: {}", stored);
        }
        OutputFormat::Json => println!("{}", json::format_json(&ctx.config, None)?),
        OutputFormat::Yaml => print!("{}", format_yaml(&ctx.config)?),
    }

    Ok(())
}

/// Run the config set-format command
pub fn set_format(ctx: &CommandContext, format: OutputFormat) -> Result<()> {
    let mut config = ctx.config.clone();
    config.preferences.format = Some(format.as_str().to_string());
    config.save_to(&ctx.config_path)?;

    println!(
        "{} Default format set to {} in {}",
        "✓".green(),
        format.as_str().bold(),
        ctx.config_path.display()
    );

    Ok(())
}
