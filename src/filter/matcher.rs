//! Record matching against a query

use indexmap::IndexSet;

use crate::filter::query::{Query, Selector};
use crate::manifest::types::ArtifactRecord;

/// Check whether a manifest record satisfies the query.
///
/// A record matches when its branch and version agree with the query (when the
/// query sets them) and its products or verticals contain every tag the query
/// asks for. A record without the tag set the query selects on never matches.
pub fn matches(record: &ArtifactRecord, query: &Query) -> bool {
    matches_field(record.branch.as_deref(), query.branch())
        && matches_field(record.version.as_deref(), query.version())
        && matches_selector(record, query.selector())
}

fn matches_field(actual: Option<&str>, expected: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(expected) => actual.is_some_and(|actual| !actual.is_empty() && actual == expected),
    }
}

fn matches_selector(record: &ArtifactRecord, selector: &Selector) -> bool {
    match selector {
        Selector::Products(wanted) => contains_all(record.products.as_ref(), wanted),
        Selector::Verticals(wanted) => contains_all(record.verticals.as_ref(), wanted),
    }
}

fn contains_all(tags: Option<&IndexSet<String>>, wanted: &IndexSet<String>) -> bool {
    tags.is_some_and(|tags| !tags.is_empty() && wanted.is_subset(tags))
}
