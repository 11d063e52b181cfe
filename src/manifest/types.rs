//! Common types for manifest and output documents

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::manifest::lenient;

/// Artifact type of database script bundles; only these carry a `dbType`
pub const SQL_ZIP: &str = "sql.zip";

/// Artifact type of configuration bundles
pub const CONFIGS_ZIP: &str = "configs.zip";

/// A single entry of the manifest's `artifacts` array.
///
/// Every field is optional: manifests are hand-maintained and records only
/// carry what applies to them. Which of the two identity forms a record uses
/// is decided by the projector, see [`crate::filter::projector`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    #[serde(default, deserialize_with = "lenient::tag_set")]
    pub verticals: Option<IndexSet<String>>,
    #[serde(default, deserialize_with = "lenient::tag_set")]
    pub products: Option<IndexSet<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub version: Option<String>,
    /// Target platform (`hybrid`, `k8s`, ...); absent means a VM deployment
    #[serde(default, deserialize_with = "lenient::string")]
    pub deployment_target: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artifact_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artifact_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub db_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub app_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub application_type: Option<String>,
}

/// Loaded manifest document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub artifacts: Vec<ArtifactRecord>,
}

/// Identity of a build artifact (`artifactId` + `artifactType`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRef {
    pub artifact_id: String,
    pub artifact_type: String,
    /// Only set for `sql.zip` bundles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_type: Option<String>,
}

/// Identity of an application (`appName` + `applicationType`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRef {
    pub app_name: String,
    pub application_type: String,
}

/// The two mutually exclusive shapes a deployable record can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtifactForm {
    Artifact(ArtifactRef),
    Application(ApplicationRef),
}

impl ArtifactForm {
    /// `artifactId` or `appName`
    pub fn name(&self) -> &str {
        match self {
            ArtifactForm::Artifact(artifact) => &artifact.artifact_id,
            ArtifactForm::Application(app) => &app.app_name,
        }
    }

    /// `artifactType` or `applicationType`
    pub fn kind(&self) -> &str {
        match self {
            ArtifactForm::Artifact(artifact) => &artifact.artifact_type,
            ArtifactForm::Application(app) => &app.application_type,
        }
    }
}

/// Projection of a matched record: the fields used for sorting, grouping and output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_target: Option<String>,
    #[serde(flatten)]
    pub form: ArtifactForm,
}

impl OutputRecord {
    pub fn artifact_type(&self) -> Option<&str> {
        match &self.form {
            ArtifactForm::Artifact(artifact) => Some(&artifact.artifact_type),
            ArtifactForm::Application(_) => None,
        }
    }

    pub fn application_type(&self) -> Option<&str> {
        match &self.form {
            ArtifactForm::Application(app) => Some(&app.application_type),
            ArtifactForm::Artifact(_) => None,
        }
    }

    pub fn db_type(&self) -> Option<&str> {
        match &self.form {
            ArtifactForm::Artifact(artifact) => artifact.db_type.as_deref(),
            ArtifactForm::Application(_) => None,
        }
    }

    pub fn deployment_target(&self) -> Option<&str> {
        self.deployment_target.as_deref()
    }
}

/// `{"artifacts": [...]}` as written to `output.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub artifacts: Vec<OutputRecord>,
}
