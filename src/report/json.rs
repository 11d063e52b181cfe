//! Canonical JSON output document

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::config::JSON_INDENT;
use crate::filter::ranking::sort_records;
use crate::manifest::types::{OutputDocument, OutputRecord};

/// Error type for writing and re-reading output documents
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to access output file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid output document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize records as `{"artifacts": [...]}` with 4-space indentation.
///
/// Strings are written as raw UTF-8, non-ASCII characters are not escaped.
pub fn write_json<W: Write>(writer: W, records: &[OutputRecord]) -> Result<(), serde_json::Error> {
    #[derive(Serialize)]
    struct Document<'a> {
        artifacts: &'a [OutputRecord],
    }

    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    Document { artifacts: records }.serialize(&mut serializer)
}

/// Write the output document to `path`, replacing any existing file
pub fn write_output(path: &Path, records: &[OutputRecord]) -> Result<(), ReportError> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    write_json(&mut writer, records)?;
    writer.flush().map_err(io_error)?;

    info!("Wrote {} artifacts to {:?}", records.len(), path);
    Ok(())
}

/// Read an output document previously written by [`write_output`]
pub fn read_output(path: &Path) -> Result<OutputDocument, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_str(&content)?)
}

/// Re-sort an existing output document in place
pub fn sort_document(path: &Path) -> Result<OutputDocument, ReportError> {
    let mut document = read_output(path)?;
    debug!(
        "Sorting {} artifacts from {:?}",
        document.artifacts.len(),
        path
    );

    sort_records(&mut document.artifacts);
    write_output(path, &document.artifacts)?;

    Ok(document)
}
