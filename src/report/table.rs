//! Grouped text tables for the console

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::manifest::types::OutputRecord;
use crate::report::category::{Category, group_records};

/// Table row for every group but "database"
#[derive(Tabled)]
struct ArtifactRow {
    #[tabled(rename = "deploymentTarget")]
    deployment_target: String,
    #[tabled(rename = "artifactId/appName")]
    name: String,
    #[tabled(rename = "artifactType/applicationType")]
    kind: String,
}

/// Table row for the "database" group
#[derive(Tabled)]
struct DatabaseRow {
    #[tabled(rename = "deploymentTarget")]
    deployment_target: String,
    #[tabled(rename = "artifactId/appName")]
    name: String,
    #[tabled(rename = "artifactType/applicationType")]
    kind: String,
    #[tabled(rename = "dbType")]
    db_type: String,
}

impl From<&OutputRecord> for ArtifactRow {
    fn from(record: &OutputRecord) -> Self {
        Self {
            deployment_target: record.deployment_target().unwrap_or_default().to_string(),
            name: record.form.name().to_string(),
            kind: record.form.kind().to_string(),
        }
    }
}

impl From<&OutputRecord> for DatabaseRow {
    fn from(record: &OutputRecord) -> Self {
        Self {
            deployment_target: record.deployment_target().unwrap_or_default().to_string(),
            name: record.form.name().to_string(),
            kind: record.form.kind().to_string(),
            db_type: record.db_type().unwrap_or_default().to_string(),
        }
    }
}

/// Render one labeled table per category, in display order.
///
/// Empty categories still get their label and a header-only table.
pub fn render_tables(records: &[OutputRecord]) -> String {
    let groups = group_records(records);
    let mut out = String::new();

    for (category, members) in &groups {
        let table = match category {
            Category::Database => {
                build_table(members.iter().map(|record| DatabaseRow::from(*record)))
            }
            _ => build_table(members.iter().map(|record| ArtifactRow::from(*record))),
        };

        out.push_str(category.as_str());
        out.push('\n');
        out.push_str(&table);
        out.push_str("\n\n");
    }

    out
}

fn build_table<R: Tabled>(rows: impl IntoIterator<Item = R>) -> String {
    let rows: Vec<R> = rows.into_iter().collect();
    let header_only = rows.is_empty();

    let mut table = Table::new(rows);
    // A header-only table has no row below the header split, so the split
    // would take the place of the bottom border.
    if header_only {
        table.with(Style::rounded().remove_horizontals());
    } else {
        table.with(Style::rounded());
    }

    table
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}
