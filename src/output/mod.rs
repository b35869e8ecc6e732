//! Output formatting for CLI results

use serde::Serialize;

use guardduty_model::Result;

pub mod json;
pub mod table;

/// Format data as YAML
pub fn format_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_yaml::to_string(data)?)
}
