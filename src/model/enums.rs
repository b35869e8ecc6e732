//! Enumerations used by GuardDuty request and result members

wire_enum! {
    /// File format of a threat intelligence list
    pub enum ThreatIntelSetFormat {
        /// Plain text, one address or CIDR per line
        Txt => "TXT",
        Stix => "STIX",
        /// Open Threat Exchange CSV
        OtxCsv => "OTX_CSV",
        AlienVault => "ALIEN_VAULT",
        ProofPoint => "PROOF_POINT",
        FireEye => "FIRE_EYE",
    }
}

wire_enum! {
    /// File format of a trusted IP list
    pub enum IpSetFormat {
        Txt => "TXT",
        Stix => "STIX",
        OtxCsv => "OTX_CSV",
        AlienVault => "ALIEN_VAULT",
        ProofPoint => "PROOF_POINT",
        FireEye => "FIRE_EYE",
    }
}

wire_enum! {
    /// Lifecycle status of a threat intelligence list
    pub enum ThreatIntelSetStatus {
        Inactive => "INACTIVE",
        Activating => "ACTIVATING",
        Active => "ACTIVE",
        Deactivating => "DEACTIVATING",
        Error => "ERROR",
        DeletePending => "DELETE_PENDING",
        Deleted => "DELETED",
    }
}

wire_enum! {
    /// Lifecycle status of a trusted IP list
    pub enum IpSetStatus {
        Inactive => "INACTIVE",
        Activating => "ACTIVATING",
        Active => "ACTIVE",
        Deactivating => "DEACTIVATING",
        Error => "ERROR",
        DeletePending => "DELETE_PENDING",
        Deleted => "DELETED",
    }
}

wire_enum! {
    /// Whether a detector is producing findings
    pub enum DetectorStatus {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

wire_enum! {
    /// How often updated findings are exported
    pub enum FindingPublishingFrequency {
        FifteenMinutes => "FIFTEEN_MINUTES",
        OneHour => "ONE_HOUR",
        SixHours => "SIX_HOURS",
    }
}

wire_enum! {
    /// Action a filter applies to matching findings
    pub enum FilterAction {
        /// Leave matching findings as they are
        Noop => "NOOP",
        /// Archive matching findings automatically
        Archive => "ARCHIVE",
    }
}

wire_enum! {
    /// Feedback attached to a finding
    pub enum Feedback {
        Useful => "USEFUL",
        NotUseful => "NOT_USEFUL",
    }
}

wire_enum! {
    /// Sort direction for finding listings
    pub enum OrderBy {
        Asc => "ASC",
        Desc => "DESC",
    }
}

wire_enum! {
    /// Kind of resource findings are published to
    pub enum DestinationType {
        S3 => "S3",
    }
}

wire_enum! {
    /// Status of a publishing destination
    pub enum PublishingStatus {
        PendingVerification => "PENDING_VERIFICATION",
        Publishing => "PUBLISHING",
        UnableToPublishFixDestinationProperty => "UNABLE_TO_PUBLISH_FIX_DESTINATION_PROPERTY",
        Stopped => "STOPPED",
    }
}
