//! Finding filter models

use std::collections::BTreeMap;

shape! {
    /// Request to create a saved filter over a detector's findings
    pub struct CreateFilterRequest = "CreateFilterRequest" {
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
        /// Filter name, 3 - 64 characters
        name [set_name, with_name]: String as "Name",
        description [set_description, with_description]: String as "Description",
        /// One of [`FilterAction`](super::FilterAction)
        action [set_action, with_action]: String as "Action",
        /// Position of the filter in the detector's filter list, 1 - 100
        rank [set_rank, with_rank]: i32 as "Rank",
        /// Criteria used to select findings
        finding_criteria [set_finding_criteria, with_finding_criteria]:
            FindingCriteria as "FindingCriteria",
        client_token [set_client_token, with_client_token]: String as "ClientToken",
        tags [set_tags, with_tags]: BTreeMap<String, String> as "Tags",
    }
}

map_entries!(CreateFilterRequest, tags: String as "Tags" {
    add_tags_entry, clear_tags_entries
});

shape! {
    pub struct CreateFilterResult = "CreateFilterResult" {
        /// Name of the created filter
        name [set_name, with_name]: String as "Name",
    }
}

shape! {
    /// Finding attribute paths mapped to the condition each must satisfy
    pub struct FindingCriteria = "FindingCriteria" {
        /// Keyed by attribute path, e.g. `resource.instanceDetails.imageId`
        criterion [set_criterion, with_criterion]: BTreeMap<String, Condition> as "Criterion",
    }
}

map_entries!(FindingCriteria, criterion: Condition as "Criterion" {
    add_criterion_entry, clear_criterion_entries
});

shape! {
    /// Comparison applied to one finding attribute
    ///
    /// `eq`/`neq`/`gt`/`gte`/`lt`/`lte` are the older spellings of
    /// `equals`/`not_equals`/`greater_than`/... and take 32-bit bounds.
    pub struct Condition = "Condition" {
        eq [set_eq, with_eq]: Vec<String> as "Eq",
        neq [set_neq, with_neq]: Vec<String> as "Neq",
        gt [set_gt, with_gt]: i32 as "Gt",
        gte [set_gte, with_gte]: i32 as "Gte",
        lt [set_lt, with_lt]: i32 as "Lt",
        lte [set_lte, with_lte]: i32 as "Lte",
        equals [set_equals, with_equals]: Vec<String> as "Equals",
        not_equals [set_not_equals, with_not_equals]: Vec<String> as "NotEquals",
        greater_than [set_greater_than, with_greater_than]: i64 as "GreaterThan",
        greater_than_or_equal [set_greater_than_or_equal, with_greater_than_or_equal]:
            i64 as "GreaterThanOrEqual",
        less_than [set_less_than, with_less_than]: i64 as "LessThan",
        less_than_or_equal [set_less_than_or_equal, with_less_than_or_equal]:
            i64 as "LessThanOrEqual",
    }
}
