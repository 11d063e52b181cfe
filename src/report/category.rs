//! Display groups for output records

use indexmap::IndexMap;

use crate::manifest::types::{CONFIGS_ZIP, OutputRecord, SQL_ZIP};

/// Display group of an output record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// deploymentTarget "k8s"
    K8s,
    /// deploymentTarget "hybrid"
    Hybrid,
    /// No deploymentTarget, not a configs or database bundle
    Vms,
    /// No deploymentTarget, configs.zip bundle
    Configs,
    /// No deploymentTarget, sql.zip bundle
    Database,
    /// Any other deploymentTarget
    Others,
}

impl Category {
    /// Order in which groups are displayed
    pub const DISPLAY_ORDER: [Category; 6] = [
        Category::K8s,
        Category::Hybrid,
        Category::Vms,
        Category::Configs,
        Category::Database,
        Category::Others,
    ];

    /// Returns the string representation of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::K8s => "k8s",
            Category::Hybrid => "hybrid",
            Category::Vms => "vms",
            Category::Configs => "configs",
            Category::Database => "database",
            Category::Others => "others",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assign a record to exactly one display group
pub fn categorize(record: &OutputRecord) -> Category {
    match record.deployment_target() {
        Some("hybrid") => Category::Hybrid,
        Some("k8s") => Category::K8s,
        Some(_) => Category::Others,
        None => match record.artifact_type() {
            Some(CONFIGS_ZIP) => Category::Configs,
            Some(SQL_ZIP) => Category::Database,
            _ => Category::Vms,
        },
    }
}

/// Partition records into groups keyed in display order.
///
/// Every category is present, empty ones included. Records keep their
/// relative order inside a group.
pub fn group_records(records: &[OutputRecord]) -> IndexMap<Category, Vec<&OutputRecord>> {
    let mut groups: IndexMap<Category, Vec<&OutputRecord>> = Category::DISPLAY_ORDER
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect();

    for record in records {
        groups.entry(categorize(record)).or_default().push(record);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::types::{ApplicationRef, ArtifactForm, ArtifactRef};
    use rstest::rstest;

    fn artifact(target: Option<&str>, kind: &str) -> OutputRecord {
        OutputRecord {
            deployment_target: target.map(str::to_string),
            form: ArtifactForm::Artifact(ArtifactRef {
                artifact_id: "id".to_string(),
                artifact_type: kind.to_string(),
                db_type: None,
            }),
        }
    }

    fn application(target: Option<&str>) -> OutputRecord {
        OutputRecord {
            deployment_target: target.map(str::to_string),
            form: ArtifactForm::Application(ApplicationRef {
                app_name: "portal".to_string(),
                application_type: "node".to_string(),
            }),
        }
    }

    #[rstest]
    #[case(artifact(Some("hybrid"), "jar"), Category::Hybrid)]
    #[case(artifact(Some("k8s"), "jar"), Category::K8s)]
    #[case(artifact(Some("k8s"), "sql.zip"), Category::K8s)]
    #[case(artifact(None, "configs.zip"), Category::Configs)]
    #[case(artifact(None, "sql.zip"), Category::Database)]
    #[case(artifact(None, "war"), Category::Vms)]
    #[case(application(None), Category::Vms)]
    #[case(artifact(Some("lambda"), "zip"), Category::Others)]
    #[case(application(Some("lambda")), Category::Others)]
    fn categorize_returns_expected(#[case] record: OutputRecord, #[case] expected: Category) {
        assert_eq!(categorize(&record), expected);
    }

    #[test]
    fn group_records_partitions_every_record_once() {
        let records = vec![
            artifact(Some("k8s"), "jar"),
            artifact(Some("hybrid"), "jar"),
            artifact(None, "configs.zip"),
            artifact(None, "war"),
            artifact(None, "sql.zip"),
            application(Some("lambda")),
            artifact(Some("k8s"), "war"),
        ];

        let groups = group_records(&records);

        let keys: Vec<Category> = groups.keys().copied().collect();
        assert_eq!(keys, Category::DISPLAY_ORDER.to_vec());
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), records.len());
        assert_eq!(groups[&Category::K8s].len(), 2);
        assert_eq!(groups[&Category::Others].len(), 1);
    }

    #[test]
    fn group_records_keeps_empty_groups() {
        let groups = group_records(&[]);

        assert_eq!(groups.len(), Category::DISPLAY_ORDER.len());
        assert!(groups.values().all(Vec::is_empty));
    }
}
