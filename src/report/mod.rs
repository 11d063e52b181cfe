//! Report layer
//! - category.rs: display groups and partitioning
//! - table.rs: grouped console tables
//! - json.rs: output document writing and re-sorting

pub mod category;
pub mod json;
pub mod table;

pub use category::{Category, categorize, group_records};
pub use json::{ReportError, read_output, sort_document, write_json, write_output};
pub use table::render_tables;
