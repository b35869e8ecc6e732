//! Trusted IP list models

use std::collections::BTreeMap;

shape! {
    /// Request to upload a list of trusted IP addresses for a detector
    pub struct CreateIpSetRequest = "CreateIPSetRequest" {
        /// Detector the IP set belongs to
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
        /// Friendly name shown in findings
        name [set_name, with_name]: String as "Name",
        /// One of [`IpSetFormat`](super::IpSetFormat)
        format [set_format, with_format]: String as "Format",
        /// URI of the file holding the list
        location [set_location, with_location]: String as "Location",
        /// Start using the list immediately
        activate [set_activate, with_activate]: bool as "Activate",
        client_token [set_client_token, with_client_token]: String as "ClientToken",
        tags [set_tags, with_tags]: BTreeMap<String, String> as "Tags",
    }
}

map_entries!(CreateIpSetRequest, tags: String as "Tags" {
    add_tags_entry, clear_tags_entries
});

shape! {
    /// Result of creating an IP set
    pub struct CreateIpSetResult = "CreateIPSetResult" {
        /// ID of the new IP set
        ip_set_id [set_ip_set_id, with_ip_set_id]: String as "IpSetId",
    }
}

shape! {
    pub struct GetIpSetRequest = "GetIPSetRequest" {
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
        ip_set_id [set_ip_set_id, with_ip_set_id]: String as "IpSetId",
    }
}

shape! {
    pub struct GetIpSetResult = "GetIPSetResult" {
        name [set_name, with_name]: String as "Name",
        format [set_format, with_format]: String as "Format",
        location [set_location, with_location]: String as "Location",
        /// One of [`IpSetStatus`](super::IpSetStatus)
        status [set_status, with_status]: String as "Status",
        tags [set_tags, with_tags]: BTreeMap<String, String> as "Tags",
    }
}

map_entries!(GetIpSetResult, tags: String as "Tags" {
    add_tags_entry, clear_tags_entries
});

shape! {
    /// Page through the IP sets of a detector
    pub struct ListIpSetsRequest = "ListIPSetsRequest" {
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
        /// Page size, 1 - 50
        max_results [set_max_results, with_max_results]: i32 as "MaxResults",
        next_token [set_next_token, with_next_token]: String as "NextToken",
    }
}

shape! {
    pub struct ListIpSetsResult = "ListIPSetsResult" {
        ip_set_ids [set_ip_set_ids, with_ip_set_ids]: Vec<String> as "IpSetIds",
        next_token [set_next_token, with_next_token]: String as "NextToken",
    }
}
