//! Name-indexed registry of every shape and enumeration
//!
//! Lets callers that only know a shape or enumeration by its API name (the
//! CLI, fixtures, log tooling) parse payloads and canonical strings without
//! naming the Rust type.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::*;

/// Report produced by parsing one payload into a shape
#[derive(Debug, Clone, Serialize)]
pub struct ShapeReport {
    /// API name of the shape
    pub shape: &'static str,

    /// `Display` rendering of the parsed shape
    pub display: String,

    /// Structural hash of the parsed shape
    pub hash: i32,

    /// Canonical wire JSON (absent members dropped)
    pub value: serde_json::Value,
}

/// Result of comparing two payloads of the same shape
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub equal: bool,
    pub left: ShapeReport,
    pub right: ShapeReport,
}

/// Registry entry for one shape
#[derive(Clone, Copy)]
pub struct ShapeEntry {
    pub name: &'static str,
    pub fields: &'static [&'static str],
    inspect: fn(&str) -> Result<ShapeReport>,
    compare: fn(&str, &str) -> Result<Comparison>,
}

impl ShapeEntry {
    const fn of<S: Shape>() -> Self {
        Self {
            name: S::SHAPE_NAME,
            fields: S::FIELDS,
            inspect: inspect_as::<S>,
            compare: compare_as::<S>,
        }
    }

    /// Parse a JSON payload as this shape
    pub fn inspect(&self, json: &str) -> Result<ShapeReport> {
        (self.inspect)(json)
    }

    /// Parse two JSON payloads as this shape and compare them structurally
    pub fn compare(&self, left: &str, right: &str) -> Result<Comparison> {
        (self.compare)(left, right)
    }
}

impl std::fmt::Debug for ShapeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeEntry")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Registry entry for one enumeration
#[derive(Clone, Copy)]
pub struct EnumEntry {
    pub name: &'static str,
    pub values: &'static [&'static str],
    parse: fn(Option<&str>) -> Result<&'static str>,
}

impl EnumEntry {
    const fn of<E: WireEnum>() -> Self {
        Self {
            name: E::ENUM_NAME,
            values: E::WIRE_VALUES,
            parse: parse_as::<E>,
        }
    }

    /// Resolve a value to its canonical string, or fail with `InvalidArgument`
    pub fn parse(&self, value: &str) -> Result<&'static str> {
        (self.parse)(Some(value))
    }
}

impl std::fmt::Debug for EnumEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumEntry")
            .field("name", &self.name)
            .field("values", &self.values)
            .finish()
    }
}

const SHAPES: &[ShapeEntry] = &[
    ShapeEntry::of::<AccountDetail>(),
    ShapeEntry::of::<City>(),
    ShapeEntry::of::<Condition>(),
    ShapeEntry::of::<Country>(),
    ShapeEntry::of::<CreateDetectorRequest>(),
    ShapeEntry::of::<CreateDetectorResult>(),
    ShapeEntry::of::<CreateFilterRequest>(),
    ShapeEntry::of::<CreateFilterResult>(),
    ShapeEntry::of::<CreateIpSetRequest>(),
    ShapeEntry::of::<CreateIpSetResult>(),
    ShapeEntry::of::<CreateMembersRequest>(),
    ShapeEntry::of::<CreateMembersResult>(),
    ShapeEntry::of::<CreateThreatIntelSetRequest>(),
    ShapeEntry::of::<CreateThreatIntelSetResult>(),
    ShapeEntry::of::<FindingCriteria>(),
    ShapeEntry::of::<GeoLocation>(),
    ShapeEntry::of::<GetDetectorRequest>(),
    ShapeEntry::of::<GetDetectorResult>(),
    ShapeEntry::of::<GetIpSetRequest>(),
    ShapeEntry::of::<GetIpSetResult>(),
    ShapeEntry::of::<GetThreatIntelSetRequest>(),
    ShapeEntry::of::<GetThreatIntelSetResult>(),
    ShapeEntry::of::<ListDetectorsRequest>(),
    ShapeEntry::of::<ListDetectorsResult>(),
    ShapeEntry::of::<ListIpSetsRequest>(),
    ShapeEntry::of::<ListIpSetsResult>(),
    ShapeEntry::of::<ListThreatIntelSetsRequest>(),
    ShapeEntry::of::<ListThreatIntelSetsResult>(),
    ShapeEntry::of::<LocalIpDetails>(),
    ShapeEntry::of::<Organization>(),
    ShapeEntry::of::<PrivateIpAddressDetails>(),
    ShapeEntry::of::<RemoteIpDetails>(),
    ShapeEntry::of::<UnprocessedAccount>(),
];

const ENUMS: &[EnumEntry] = &[
    EnumEntry::of::<DestinationType>(),
    EnumEntry::of::<DetectorStatus>(),
    EnumEntry::of::<Feedback>(),
    EnumEntry::of::<FilterAction>(),
    EnumEntry::of::<FindingPublishingFrequency>(),
    EnumEntry::of::<IpSetFormat>(),
    EnumEntry::of::<IpSetStatus>(),
    EnumEntry::of::<OrderBy>(),
    EnumEntry::of::<PublishingStatus>(),
    EnumEntry::of::<ThreatIntelSetFormat>(),
    EnumEntry::of::<ThreatIntelSetStatus>(),
];

/// Every registered shape, sorted by API name
pub fn shapes() -> &'static [ShapeEntry] {
    SHAPES
}

/// Every registered enumeration, sorted by API name
pub fn enums() -> &'static [EnumEntry] {
    ENUMS
}

/// Look up a shape by its exact API name
pub fn find_shape(name: &str) -> Result<&'static ShapeEntry> {
    log::debug!("Looking up shape {}", name);
    SHAPES
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| Error::UnknownShape(name.to_string()))
}

/// Look up an enumeration by its exact API name
pub fn find_enum(name: &str) -> Result<&'static EnumEntry> {
    log::debug!("Looking up enumeration {}", name);
    ENUMS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| Error::UnknownEnum(name.to_string()))
}

/// Parse a JSON payload into the named shape
pub fn inspect(shape: &str, json: &str) -> Result<ShapeReport> {
    find_shape(shape)?.inspect(json)
}

/// Parse two JSON payloads into the named shape and compare them
pub fn compare(shape: &str, left: &str, right: &str) -> Result<Comparison> {
    find_shape(shape)?.compare(left, right)
}

/// Resolve a value of the named enumeration to its canonical string
pub fn parse_enum(name: &str, value: &str) -> Result<&'static str> {
    find_enum(name)?.parse(value)
}

fn parse_shape<S: Shape>(json: &str) -> Result<S> {
    Ok(serde_json::from_str(json)?)
}

fn report<S: Shape>(shape: &S) -> Result<ShapeReport> {
    Ok(ShapeReport {
        shape: S::SHAPE_NAME,
        display: shape.to_string(),
        hash: shape.structural_hash(),
        value: serde_json::to_value(shape)?,
    })
}

fn inspect_as<S: Shape>(json: &str) -> Result<ShapeReport> {
    let shape: S = parse_shape(json)?;
    log::debug!("Parsed {} with hash {}", S::SHAPE_NAME, shape.structural_hash());
    report(&shape)
}

fn compare_as<S: Shape>(left: &str, right: &str) -> Result<Comparison> {
    let left: S = parse_shape(left)?;
    let right: S = parse_shape(right)?;

    Ok(Comparison {
        equal: left == right,
        left: report(&left)?,
        right: report(&right)?,
    })
}

fn parse_as<E: WireEnum>(value: Option<&str>) -> Result<&'static str> {
    E::from_value(value).map(E::as_str)
}
