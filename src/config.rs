use std::path::PathBuf;

// =============================================================================
// File name constants
// =============================================================================

/// Manifest file looked up in the working directory when no path is given
pub const DEFAULT_MANIFEST_FILE: &str = "deployment_manifest.json";

/// Filtered output document
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

/// Unique products across a manifest, one per line
pub const PRODUCTS_MASTER_FILE: &str = "products_master.out";

/// Unique verticals across a manifest, one per line
pub const VERTICALS_MASTER_FILE: &str = "verticals_master.out";

/// Log file written when logging to a file without an explicit path
pub const LOG_FILE_NAME: &str = "manifest-filter.log";

/// Indentation used for every JSON document this tool writes
pub const JSON_INDENT: &[u8] = b"    ";

/// Returns the path to the data directory for manifest-filter.
/// Uses $XDG_DATA_HOME/manifest-filter if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/manifest-filter,
/// or ./manifest-filter if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default path of the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("manifest-filter")
}
