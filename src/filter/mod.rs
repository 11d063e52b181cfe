//! Filter layer
//! - query.rs: validated, immutable query
//! - matcher.rs: record matching (tags, branch, version)
//! - projector.rs: record projection onto output records
//! - ranking.rs: comparator chain and stable sort
//! - pipeline.rs: match -> project -> sort

pub mod matcher;
pub mod pipeline;
pub mod projector;
pub mod query;
pub mod ranking;

pub use matcher::matches;
pub use pipeline::{filter_manifest, run_query};
pub use projector::project;
pub use query::{Query, QueryArgs, QueryError, Selector};
pub use ranking::{compare, sort_records};
