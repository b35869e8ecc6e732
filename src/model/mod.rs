//! GuardDuty API data models
//!
//! Request, result and nested value shapes plus the closed enumerations they
//! refer to. Models are organized by resource type for easy discovery.
//!
//! Every shape member is optional. Absent members are omitted from the wire
//! JSON and from `Display` output, and they are never confused with empty
//! strings or empty collections.

#[macro_use]
mod macros;

pub(crate) mod field;

mod detector;
mod enums;
mod filter;
mod ip_set;
mod member;
mod network;
mod threat_intel_set;

pub use field::{Double, FieldValue, Shape, WireEnum};

// Re-export all models for convenient access
pub use detector::{
    CreateDetectorRequest, CreateDetectorResult, GetDetectorRequest, GetDetectorResult,
    ListDetectorsRequest, ListDetectorsResult,
};
pub use enums::{
    DestinationType, DetectorStatus, Feedback, FilterAction, FindingPublishingFrequency,
    IpSetFormat, IpSetStatus, OrderBy, PublishingStatus, ThreatIntelSetFormat,
    ThreatIntelSetStatus,
};
pub use filter::{Condition, CreateFilterRequest, CreateFilterResult, FindingCriteria};
pub use ip_set::{
    CreateIpSetRequest, CreateIpSetResult, GetIpSetRequest, GetIpSetResult, ListIpSetsRequest,
    ListIpSetsResult,
};
pub use member::{AccountDetail, CreateMembersRequest, CreateMembersResult, UnprocessedAccount};
pub use network::{
    City, Country, GeoLocation, LocalIpDetails, Organization, PrivateIpAddressDetails,
    RemoteIpDetails,
};
pub use threat_intel_set::{
    CreateThreatIntelSetRequest, CreateThreatIntelSetResult, GetThreatIntelSetRequest,
    GetThreatIntelSetResult, ListThreatIntelSetsRequest, ListThreatIntelSetsResult,
};
