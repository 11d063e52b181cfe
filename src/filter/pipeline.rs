//! Match, project and sort in one pass over a manifest

use tracing::{debug, info, warn};

use crate::filter::matcher::matches;
use crate::filter::projector::project;
use crate::filter::query::Query;
use crate::filter::ranking::sort_records;
use crate::manifest::source::{ManifestError, ManifestSource};
use crate::manifest::types::{Manifest, OutputRecord};

/// Select the records matching `query` and return their projections in ranked order.
///
/// Matching records complete in neither artifact nor application form are
/// left out and logged.
pub fn filter_manifest(manifest: &Manifest, query: &Query) -> Vec<OutputRecord> {
    let mut output: Vec<OutputRecord> = manifest
        .artifacts
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, query))
        .filter_map(|(index, record)| {
            let projected = project(record);
            if projected.is_none() {
                warn!(
                    index,
                    "Skipping matching record without artifactId/artifactType or appName/applicationType"
                );
            }
            projected
        })
        .collect();

    debug!(
        "Matched {} of {} manifest records",
        output.len(),
        manifest.artifacts.len()
    );

    sort_records(&mut output);
    output
}

/// Load the manifest from `source` and filter it
pub fn run_query<S: ManifestSource + ?Sized>(
    source: &S,
    query: &Query,
) -> Result<Vec<OutputRecord>, ManifestError> {
    let manifest = source.load()?;
    let output = filter_manifest(&manifest, query);

    info!(
        selector = ?query.selector(),
        branch = query.branch(),
        version = query.version(),
        "Query selected {} artifacts",
        output.len()
    );

    Ok(output)
}
