//! Shape command implementations

use std::io::Read;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use guardduty_model::Result;
use guardduty_model::catalog::{self, Comparison, ShapeEntry, ShapeReport};

use crate::cli::{CommandContext, OutputFormat};
use crate::output::table::{self, NO_ENTRIES, NO_MEMBERS};
use crate::output::{format_yaml, json};

/// Shape summary for table/JSON output
#[derive(Debug, Tabled, Serialize)]
struct ShapeDisplay {
    #[tabled(rename = "SHAPE")]
    name: &'static str,
    #[tabled(rename = "FIELDS")]
    #[serde(skip)]
    joined: String,
    #[tabled(skip)]
    fields: &'static [&'static str],
}

impl From<&ShapeEntry> for ShapeDisplay {
    fn from(entry: &ShapeEntry) -> Self {
        Self {
            name: entry.name,
            joined: entry.fields.join(", "),
            fields: entry.fields,
        }
    }
}

/// One present member of a parsed payload
#[derive(Debug, Tabled)]
struct MemberDisplay {
    #[tabled(rename = "FIELD")]
    field: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

/// Hash of one compared payload
#[derive(Debug, Tabled)]
struct PayloadHash {
    #[tabled(rename = "PAYLOAD")]
    payload: String,
    #[tabled(rename = "HASH")]
    hash: i32,
}

/// Flatten the top-level members of a canonical payload into rows.
///
/// Strings are shown bare; nested values are shown as compact JSON.
fn member_rows(report: &ShapeReport) -> Vec<MemberDisplay> {
    let Some(members) = report.value.as_object() else {
        return Vec::new();
    };

    members
        .iter()
        .map(|(field, value)| MemberDisplay {
            field: field.clone(),
            value: match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })
        .collect()
}

/// Read a payload from a file, or stdin when no file is given
fn read_payload(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            log::debug!("Reading payload from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            log::debug!("Reading payload from stdin");
            let mut payload = String::new();
            std::io::stdin().read_to_string(&mut payload)?;
            Ok(payload)
        }
    }
}

/// Run the shape list command
pub fn list(ctx: &CommandContext) -> Result<()> {
    let rows: Vec<ShapeDisplay> = catalog::shapes().iter().map(ShapeDisplay::from).collect();

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

/// Run the shape show command
pub fn show(ctx: &CommandContext, name: &str, file: Option<&Path>) -> Result<()> {
    let entry = catalog::find_shape(name)?;
    let payload = read_payload(file)?;
    let report = entry.inspect(&payload)?;

    match ctx.format {
        OutputFormat::Pretty => {
            println!("{}", report.shape.bold());
            println!("{}", report.display);
            println!("{} {}", "hash:".dimmed(), report.hash);
        }
        OutputFormat::Table => {
            println!("{}", table::format_table(&member_rows(&report), NO_MEMBERS));
        }
        OutputFormat::Json => println!("{}", json::format_json(&report, Some(entry.name))?),
        OutputFormat::Yaml => print!("{}", format_yaml(&report)?),
    }

    Ok(())
}

/// Run the shape compare command
pub fn compare(ctx: &CommandContext, name: &str, left: &Path, right: &Path) -> Result<()> {
    let entry = catalog::find_shape(name)?;
    let comparison = entry.compare(&read_payload(Some(left))?, &read_payload(Some(right))?)?;

    match ctx.format {
        OutputFormat::Pretty => print_comparison(&comparison),
        OutputFormat::Table => {
            let rows = [
                PayloadHash {
                    payload: left.display().to_string(),
                    hash: comparison.left.hash,
                },
                PayloadHash {
                    payload: right.display().to_string(),
                    hash: comparison.right.hash,
                },
            ];
            println!("{}", table::format_table(&rows, NO_ENTRIES));
            println!("equal: {}", comparison.equal);
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&comparison, Some(entry.name))?);
        }
        OutputFormat::Yaml => print!("{}", format_yaml(&comparison)?),
    }

    Ok(())
}

fn print_comparison(comparison: &Comparison) {
    if comparison.equal {
        println!("{} {} payloads are equal", "✓".green(), comparison.left.shape);
    } else {
        println!("{} {} payloads differ", "✗".red(), comparison.left.shape);
        println!("  left:  {}", comparison.left.display);
        println!("  right: {}", comparison.right.display);
    }
    println!(
        "{} {} / {}",
        "hash:".dimmed(),
        comparison.left.hash,
        comparison.right.hash
    );
}
