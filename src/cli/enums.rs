//! Enumeration command implementations

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use guardduty_model::Result;
use guardduty_model::catalog::{self, EnumEntry};

use crate::cli::{CommandContext, OutputFormat};
use crate::output::table::{self, NO_ENTRIES};
use crate::output::{format_yaml, json};

/// Enumeration summary for table/JSON output
#[derive(Debug, Tabled, Serialize)]
struct EnumDisplay {
    #[tabled(rename = "ENUM")]
    name: &'static str,
    #[tabled(rename = "VALUES")]
    #[serde(skip)]
    joined: String,
    #[tabled(skip)]
    values: &'static [&'static str],
}

impl From<&EnumEntry> for EnumDisplay {
    fn from(entry: &EnumEntry) -> Self {
        Self {
            name: entry.name,
            joined: entry.values.join(", "),
            values: entry.values,
        }
    }
}

/// Single canonical value row
#[derive(Debug, Tabled, Serialize)]
struct ValueDisplay {
    #[tabled(rename = "VALUE")]
    value: &'static str,
}

/// Outcome of a successful lookup
#[derive(Debug, Serialize)]
struct ParsedValue<'a> {
    #[serde(rename = "enum")]
    name: &'a str,
    value: &'static str,
}

/// Run the enum list command
pub fn list(ctx: &CommandContext) -> Result<()> {
    let rows: Vec<EnumDisplay> = catalog::enums().iter().map(EnumDisplay::from).collect();

    match ctx.format {
        OutputFormat::Pretty => {
            for row in &rows {
                println!("{}", row.name.bold());
                println!("  {}", row.joined.dimmed());
            }
        }
        OutputFormat::Table => println!("{}", table::format_table(&rows, NO_ENTRIES)),
        OutputFormat::Json => println!("{}", json::format_json(&rows, None)?),
        OutputFormat::Yaml => print!("{}", format_yaml(&rows)?),
    }

    Ok(())
}

/// Run the enum values command
pub fn values(ctx: &CommandContext, name: &str) -> Result<()> {
    let entry = catalog::find_enum(name)?;

    match ctx.format {
        OutputFormat::Pretty => {
            for value in entry.values {
                println!("{}", value);
            }
        }
        OutputFormat::Table => {
            let rows: Vec<ValueDisplay> = entry
                .values
                .iter()
                .map(|value| ValueDisplay { value: *value })
                .collect();
            println!("{}", table::format_table(&rows, NO_ENTRIES));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(entry.values, Some(entry.name))?);
        }
        OutputFormat::Yaml => print!("{}", format_yaml(entry.values)?),
    }

    Ok(())
}

/// Run the enum parse command
///
/// Fails with `InvalidArgument` when the value is empty or not one of the
/// enumeration's canonical strings.
pub fn parse(ctx: &CommandContext, name: &str, value: &str) -> Result<()> {
    let canonical = catalog::parse_enum(name, value)?;
    let parsed = ParsedValue {
        name,
        value: canonical,
    };

    match ctx.format {
        OutputFormat::Pretty => {
            println!("{} {} is a valid {}", "✓".green(), canonical.bold(), name);
        }
        OutputFormat::Table => {
            let rows = [ValueDisplay { value: canonical }];
            println!("{}", table::format_table(&rows, NO_ENTRIES));
        }
        OutputFormat::Json => println!("{}", json::format_json(&parsed, Some(name))?),
        OutputFormat::Yaml => print!("{}", format_yaml(&parsed)?),
    }

    Ok(())
}
