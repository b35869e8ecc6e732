//! Threat intelligence list models

use std::collections::BTreeMap;

shape! {
    /// Request to upload a list of known malicious IP addresses for a detector
    pub struct CreateThreatIntelSetRequest = "CreateThreatIntelSetRequest" {
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
        name [set_name, with_name]: String as "Name",
        /// One of [`ThreatIntelSetFormat`](super::ThreatIntelSetFormat)
        format [set_format, with_format]: String as "Format",
        location [set_location, with_location]: String as "Location",
        activate [set_activate, with_activate]: bool as "Activate",
        client_token [set_client_token, with_client_token]: String as "ClientToken",
        tags [set_tags, with_tags]: BTreeMap<String, String> as "Tags",
    }
}

map_entries!(CreateThreatIntelSetRequest, tags: String as "Tags" {
    add_tags_entry, clear_tags_entries
});

shape! {
    pub struct CreateThreatIntelSetResult = "CreateThreatIntelSetResult" {
        threat_intel_set_id [set_threat_intel_set_id, with_threat_intel_set_id]:
            String as "ThreatIntelSetId",
    }
}

shape! {
    pub struct GetThreatIntelSetRequest = "GetThreatIntelSetRequest" {
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
        threat_intel_set_id [set_threat_intel_set_id, with_threat_intel_set_id]:
            String as "ThreatIntelSetId",
    }
}

shape! {
    pub struct GetThreatIntelSetResult = "GetThreatIntelSetResult" {
        name [set_name, with_name]: String as "Name",
        format [set_format, with_format]: String as "Format",
        location [set_location, with_location]: String as "Location",
        /// One of [`ThreatIntelSetStatus`](super::ThreatIntelSetStatus)
        status [set_status, with_status]: String as "Status",
        tags [set_tags, with_tags]: BTreeMap<String, String> as "Tags",
    }
}

map_entries!(GetThreatIntelSetResult, tags: String as "Tags" {
    add_tags_entry, clear_tags_entries
});

shape! {
    pub struct ListThreatIntelSetsRequest = "ListThreatIntelSetsRequest" {
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
        max_results [set_max_results, with_max_results]: i32 as "MaxResults",
        next_token [set_next_token, with_next_token]: String as "NextToken",
    }
}

shape! {
    pub struct ListThreatIntelSetsResult = "ListThreatIntelSetsResult" {
        threat_intel_set_ids [set_threat_intel_set_ids, with_threat_intel_set_ids]:
            Vec<String> as "ThreatIntelSetIds",
        next_token [set_next_token, with_next_token]: String as "NextToken",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Shape, ThreatIntelSetFormat, ThreatIntelSetStatus};

    #[test]
    fn test_request_round_trips_through_wire_json() {
        let request = CreateThreatIntelSetRequest::new()
            .with_detector_id("d-1")
            .with_name("otx-feed")
            .with_format(ThreatIntelSetFormat::OtxCsv)
            .with_location("https://s3.amazonaws.com/bucket/otx.csv")
            .with_activate(true)
            .add_tags_entry("source", "otx")
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["format"], "OTX_CSV");
        assert_eq!(json["activate"], true);
        assert!(json.get("clientToken").is_none());

        let back: CreateThreatIntelSetRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
        assert_eq!(back.structural_hash(), request.structural_hash());
    }

    #[test]
    fn test_get_result_typed_status() {
        let result = GetThreatIntelSetResult::new()
            .with_name("otx-feed")
            .with_status(ThreatIntelSetStatus::Activating);

        let status: ThreatIntelSetStatus = result.status().unwrap().parse().unwrap();
        assert_eq!(status, ThreatIntelSetStatus::Activating);
        assert_eq!(result.to_string(), "{Name: otx-feed, Status: ACTIVATING}");
    }

    #[test]
    fn test_create_result_display() {
        let result = CreateThreatIntelSetResult::new().with_threat_intel_set_id("tis-9");
        assert_eq!(result.to_string(), "{ThreatIntelSetId: tis-9}");
        assert_eq!(result.threat_intel_set_id(), Some("tis-9"));
    }

    #[test]
    fn test_list_result_next_token() {
        let result: ListThreatIntelSetsResult =
            serde_json::from_str(r#"{"threatIntelSetIds":[],"nextToken":"page-2"}"#).unwrap();
        assert_eq!(result.threat_intel_set_ids().map(<[String]>::len), Some(0));
        assert_eq!(result.next_token(), Some("page-2"));
    }

    #[test]
    fn test_get_and_list_requests() {
        let get = GetThreatIntelSetRequest::new()
            .with_detector_id("d-1")
            .with_threat_intel_set_id("tis-9");
        assert_eq!(get.to_string(), "{DetectorId: d-1, ThreatIntelSetId: tis-9}");

        let mut list = ListThreatIntelSetsRequest::new()
            .with_detector_id("d-1")
            .with_next_token("page-2");
        assert_eq!(list.next_token(), Some("page-2"));

        list.set_next_token(None);
        assert_eq!(list, ListThreatIntelSetsRequest::new().with_detector_id("d-1"));
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"{"detectorId":"d-1"}"#
        );
    }
}
