//! Filter a deployment manifest by product or vertical, branch and version,
//! then report the matching artifacts as a sorted JSON document and as
//! grouped console tables.
//!
//! # Modules
//!
//! - [`manifest`]: Manifest document types and loading
//! - [`filter`]: Query, matcher, projector, ranking and the filter pipeline
//! - [`report`]: Display groups, console tables and the JSON output document
//! - [`inventory`]: Master lists of products, verticals and targets
//! - [`config`]: File name constants and data directory resolution

pub mod config;
pub mod filter;
pub mod inventory;
pub mod manifest;
pub mod report;
