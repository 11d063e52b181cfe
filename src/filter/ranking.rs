//! Deterministic ordering of output records

use std::cmp::Ordering;

use crate::manifest::types::OutputRecord;

/// Extracts one ranking attribute; `None` means the record lacks it
type RankKey = fn(&OutputRecord) -> Option<&str>;

/// Attributes compared in order until one of them tells two records apart
const RANK_KEYS: [RankKey; 4] = [
    OutputRecord::deployment_target,
    OutputRecord::artifact_type,
    OutputRecord::application_type,
    OutputRecord::db_type,
];

/// Compare two output records.
///
/// For each attribute in turn: a record that has it ranks before one that
/// lacks it, two records that both have it compare by value. Records equal on
/// every attribute compare equal, so a stable sort keeps their input order.
pub fn compare(a: &OutputRecord, b: &OutputRecord) -> Ordering {
    RANK_KEYS
        .iter()
        .map(|key| compare_present_first(key(a), key(b)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn compare_present_first(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort by [`compare`]
pub fn sort_records(records: &mut [OutputRecord]) {
    records.sort_by(compare);
}
