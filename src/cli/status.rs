//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;

/// Run the status command to display configuration status
pub fn run(ctx: &CommandContext) {
    println!("{}\n", "gdmodel Configuration Status".bold());

    println!(
        "Config file: {}",
        ctx.config_path.display().to_string().cyan()
    );

    if ctx.config_path.exists() {
        println!("{} Config file found", "✓".green());
    } else {
        println!("{} Config file not found, using defaults", "○".dimmed());
        println!("  → Run 'gdmodel config set-format <FORMAT>' to create one");
    }

    match ctx.config.preferences.format.as_deref() {
        Some(format) => println!("{} Default format: {}", "✓".green(), format),
        None => println!("{} No default format set", "○".dimmed()),
    }

    println!("Effective format: {}", ctx.format);
}
