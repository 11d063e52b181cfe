use std::path::Path;

use manifest_filter::filter::{Query, QueryArgs, run_query};
use manifest_filter::manifest::{FileManifestSource, ManifestError, ManifestSource};
use manifest_filter::report::{Category, group_records, read_output, render_tables, write_output};
use serde_json::json;
use tempfile::TempDir;

fn write_manifest(dir: &Path, manifest: serde_json::Value) -> FileManifestSource {
    let path = dir.join("deployment_manifest.json");
    std::fs::write(&path, serde_json::to_string_pretty(&manifest).unwrap()).unwrap();
    FileManifestSource::new(path)
}

fn sample_manifest() -> serde_json::Value {
    json!({
        "artifacts": [
            {
                "products": ["pay", "card"],
                "branch": "release/3.1",
                "version": "3.1.0",
                "appName": "portal",
                "applicationType": "node"
            },
            {
                "products": ["pay"],
                "branch": "release/3.1",
                "version": "3.1.0",
                "artifactId": "schema",
                "artifactType": "sql.zip",
                "dbType": "oracle"
            },
            {
                "products": ["pay"],
                "branch": "release/3.1",
                "version": "3.1.0",
                "artifactId": "pay-configs",
                "artifactType": "configs.zip"
            },
            {
                "products": ["pay"],
                "branch": "release/3.1",
                "version": "3.0.0",
                "deploymentTarget": "k8s",
                "artifactId": "old-svc",
                "artifactType": "jar"
            },
            {
                "products": ["pay"],
                "branch": "release/3.1",
                "version": "3.1.0",
                "deploymentTarget": "k8s",
                "artifactId": "svc-a",
                "artifactType": "jar"
            },
            {
                "products": ["card"],
                "branch": "release/3.1",
                "version": "3.1.0",
                "deploymentTarget": "hybrid",
                "artifactId": "card-edge",
                "artifactType": "jar"
            },
            {
                "verticals": ["retail"],
                "branch": "main",
                "deploymentTarget": "hybrid",
                "artifactId": "retail-edge",
                "artifactType": "war"
            },
            {
                "products": ["pay"],
                "branch": "main",
                "version": "3.1.0",
                "artifactId": "legacy-vm",
                "artifactType": "war"
            }
        ]
    })
}

#[test]
fn filter_run_writes_sorted_document_and_groups() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_manifest(temp_dir.path(), sample_manifest());
    let output_path = temp_dir.path().join("output.json");
    let query = Query::products(["pay"])
        .with_branch("release/3.1")
        .with_version("3.1.0");

    let records = run_query(&source, &query).unwrap();
    write_output(&output_path, &records).unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        value,
        json!({
            "artifacts": [
                { "deploymentTarget": "k8s", "artifactId": "svc-a", "artifactType": "jar" },
                { "artifactId": "pay-configs", "artifactType": "configs.zip" },
                { "artifactId": "schema", "artifactType": "sql.zip", "dbType": "oracle" },
                { "appName": "portal", "applicationType": "node" }
            ]
        })
    );
    assert_eq!(read_output(&output_path).unwrap().artifacts, records);

    let groups = group_records(&records);
    let names = |category: Category| {
        groups[&category]
            .iter()
            .map(|r| r.form.name())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(Category::K8s), vec!["svc-a"]);
    assert_eq!(names(Category::Hybrid), Vec::<&str>::new());
    assert_eq!(names(Category::Configs), vec!["pay-configs"]);
    assert_eq!(names(Category::Database), vec!["schema"]);
    assert_eq!(names(Category::Vms), vec!["portal"]);
    assert_eq!(names(Category::Others), Vec::<&str>::new());
}

#[test]
fn every_selected_record_carries_the_queried_products_and_branch() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_manifest(temp_dir.path(), sample_manifest());
    let manifest = source.load().unwrap();

    let query = Query::products(["pay"]).with_branch("release/3.1");
    let selected: Vec<_> = manifest
        .artifacts
        .iter()
        .filter(|record| manifest_filter::filter::matches(record, &query))
        .collect();

    assert_eq!(selected.len(), 5);
    for record in selected {
        assert!(record.products.as_ref().unwrap().contains("pay"));
        assert_eq!(record.branch.as_deref(), Some("release/3.1"));
    }
}

#[test]
fn vertical_query_selects_only_records_with_verticals() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_manifest(temp_dir.path(), sample_manifest());

    let query = Query::try_from(QueryArgs {
        verticals: vec!["retail".to_string()],
        manifest_supplied: true,
        ..Default::default()
    })
    .unwrap();
    let records = run_query(&source, &query).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].form.name(), "retail-edge");
    assert!(render_tables(&records).contains("retail-edge"));
}

#[test]
fn single_k8s_record_example() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_manifest(
        temp_dir.path(),
        json!({
            "artifacts": [
                { "deploymentTarget": "k8s", "artifactId": "svc-a", "artifactType": "jar", "products": ["pay"] }
            ]
        }),
    );

    let records = run_query(&source, &Query::products(["pay"])).unwrap();

    assert_eq!(
        serde_json::to_value(&records).unwrap(),
        json!([{ "deploymentTarget": "k8s", "artifactId": "svc-a", "artifactType": "jar" }])
    );
    assert_eq!(group_records(&records)[&Category::K8s].len(), 1);
}

#[test]
fn malformed_manifest_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_manifest(temp_dir.path(), json!({ "components": [] }));
    let output_path = temp_dir.path().join("output.json");

    let result = run_query(&source, &Query::products(["pay"]))
        .map(|records| write_output(&output_path, &records));

    assert!(matches!(result, Err(ManifestError::MissingArtifacts)));
    assert!(!output_path.exists());
}

#[test]
fn mistyped_record_drops_out_without_failing_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_manifest(
        temp_dir.path(),
        json!({
            "artifacts": [
                { "products": ["pay"], "version": "3.1.0", "deploymentTarget": "k8s", "artifactId": "svc-a", "artifactType": "jar" },
                { "products": ["pay"], "version": 3.1, "deploymentTarget": "k8s", "artifactId": "svc-b", "artifactType": "jar" },
                { "products": ["other"], "version": 3, "artifactId": "svc-c", "artifactType": "jar" }
            ]
        }),
    );

    let records = run_query(&source, &Query::products(["pay"]).with_version("3.1.0")).unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.form.name()).collect();
    assert_eq!(names, vec!["svc-a"]);
}
