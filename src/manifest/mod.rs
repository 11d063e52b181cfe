//! Manifest layer
//! - types.rs: Manifest, artifact record and output record types
//! - lenient.rs: tolerant field deserializers
//! - source.rs: ManifestSource trait and the file-backed source

pub mod lenient;
pub mod source;
pub mod types;

pub use source::{FileManifestSource, ManifestError, ManifestSource, parse_manifest};
pub use types::{
    ApplicationRef, ArtifactForm, ArtifactRecord, ArtifactRef, Manifest, OutputDocument,
    OutputRecord,
};
