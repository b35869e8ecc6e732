//! JSON output formatting
//!
//! Every JSON response is wrapped as `{"data": ..., "meta": {...}}`. The
//! `meta.subject` member names the shape or enumeration the data describes
//! and is left out for whole-catalog listings.

use chrono::Utc;
use serde::Serialize;

/// `data` + `meta` envelope around one command result
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Meta<'a>,
}

/// Provenance of a JSON response
#[derive(Debug, Serialize)]
pub struct Meta<'a> {
    /// RFC 3339 time the response was produced
    pub generated_at: String,

    /// `gdmodel` version that produced it
    pub version: &'static str,

    /// Shape or enumeration the data describes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<&'a str>,
}

impl<'a, T: ?Sized> Envelope<'a, T> {
    pub fn new(data: &'a T, subject: Option<&'a str>) -> Self {
        Self {
            data,
            meta: Meta {
                generated_at: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
                subject,
            },
        }
    }
}

/// Render `data` inside the envelope as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(
    data: &T,
    subject: Option<&str>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope::new(data, subject))
}
