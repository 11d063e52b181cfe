//! Manifest loading

use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::manifest::types::{ArtifactRecord, Manifest};

/// Error type for manifest loading
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file could not be read
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON or a record has the wrong shape
    #[error("Invalid manifest JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The top-level `artifacts` array is missing
    #[error("Manifest has no `artifacts` array")]
    MissingArtifacts,
}

/// Where a manifest comes from.
///
/// Fetching the manifest from a remote branch is left to whoever implements
/// this trait; the filter pipeline only needs a loaded document.
#[cfg_attr(test, automock)]
pub trait ManifestSource {
    /// Load the manifest document
    fn load(&self) -> Result<Manifest, ManifestError>;
}

/// Manifest stored as a local JSON file
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for FileManifestSource {
    fn load(&self) -> Result<Manifest, ManifestError> {
        debug!("Reading manifest from {:?}", self.path);

        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            warn!("Failed to read manifest {:?}: {}", self.path, source);
            ManifestError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        parse_manifest(&content)
    }
}

#[derive(Deserialize)]
struct RawManifest {
    artifacts: Option<Vec<serde_json::Value>>,
}

/// Parse manifest JSON content.
///
/// Only unparsable JSON and a missing `artifacts` array are errors. Entries
/// that are not objects are skipped; mistyped fields read as absent.
pub fn parse_manifest(content: &str) -> Result<Manifest, ManifestError> {
    let raw: RawManifest = serde_json::from_str(content)?;
    let entries = raw.artifacts.ok_or(ManifestError::MissingArtifacts)?;
    let total = entries.len();

    let artifacts: Vec<ArtifactRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, "Skipping manifest entry: {}", e);
                None
            }
        })
        .collect();

    debug!("Parsed manifest with {} of {} records", artifacts.len(), total);

    Ok(Manifest { artifacts })
}
