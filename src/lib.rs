//! Typed models for the GuardDuty API
//!
//! The [`model`] module holds the request, result and nested value shapes
//! plus the enumerations they reference. [`catalog`] looks shapes and
//! enumerations up by API name so untyped payloads can be checked at runtime.
//!
//! ```
//! use guardduty_model::model::{CreateIpSetResult, Shape, ThreatIntelSetFormat};
//!
//! let result = CreateIpSetResult::new().with_ip_set_id("abc-123");
//! assert_eq!(result.to_string(), "{IpSetId: abc-123}");
//! assert_eq!(result.structural_hash(), CreateIpSetResult::new().with_ip_set_id("abc-123").structural_hash());
//!
//! let format: ThreatIntelSetFormat = "OTX_CSV".parse().unwrap();
//! assert_eq!(format, ThreatIntelSetFormat::OtxCsv);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;

pub use error::{ConfigError, Error, Result};
