//! Detector models

use std::collections::BTreeMap;

shape! {
    /// Request to create a detector, the regional resource that produces findings
    pub struct CreateDetectorRequest = "CreateDetectorRequest" {
        /// Whether the detector starts enabled
        enable [set_enable, with_enable]: bool as "Enable",
        /// Idempotency token for the create call
        client_token [set_client_token, with_client_token]: String as "ClientToken",
        /// Export frequency; one of [`FindingPublishingFrequency`](super::FindingPublishingFrequency)
        finding_publishing_frequency [set_finding_publishing_frequency, with_finding_publishing_frequency]:
            String as "FindingPublishingFrequency",
        /// Tags applied to the new detector
        tags [set_tags, with_tags]: BTreeMap<String, String> as "Tags",
    }
}

map_entries!(CreateDetectorRequest, tags: String as "Tags" {
    add_tags_entry, clear_tags_entries
});

shape! {
    /// Result of creating a detector
    pub struct CreateDetectorResult = "CreateDetectorResult" {
        /// ID of the created detector
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
    }
}

shape! {
    pub struct GetDetectorRequest = "GetDetectorRequest" {
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
    }
}

shape! {
    /// Detector properties as returned by the service
    pub struct GetDetectorResult = "GetDetectorResult" {
        /// Creation timestamp
        created_at [set_created_at, with_created_at]: String as "CreatedAt",
        finding_publishing_frequency [set_finding_publishing_frequency, with_finding_publishing_frequency]:
            String as "FindingPublishingFrequency",
        /// Service role used by the detector
        service_role [set_service_role, with_service_role]: String as "ServiceRole",
        /// One of [`DetectorStatus`](super::DetectorStatus)
        status [set_status, with_status]: String as "Status",
        /// Last update timestamp
        updated_at [set_updated_at, with_updated_at]: String as "UpdatedAt",
        tags [set_tags, with_tags]: BTreeMap<String, String> as "Tags",
    }
}

map_entries!(GetDetectorResult, tags: String as "Tags" {
    add_tags_entry, clear_tags_entries
});

shape! {
    pub struct ListDetectorsRequest = "ListDetectorsRequest" {
        /// Page size, 1 - 50
        max_results [set_max_results, with_max_results]: i32 as "MaxResults",
        /// Continuation token from a previous page
        next_token [set_next_token, with_next_token]: String as "NextToken",
    }
}

shape! {
    pub struct ListDetectorsResult = "ListDetectorsResult" {
        detector_ids [set_detector_ids, with_detector_ids]: Vec<String> as "DetectorIds",
        next_token [set_next_token, with_next_token]: String as "NextToken",
    }
}
