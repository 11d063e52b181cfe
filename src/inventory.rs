//! Master lists of the tags and targets used across a manifest

use std::path::Path;

use indexmap::IndexSet;
use tracing::info;

use crate::config::{PRODUCTS_MASTER_FILE, VERTICALS_MASTER_FILE};
use crate::manifest::types::Manifest;
use crate::report::json::ReportError;

/// Unique values found in a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Sorted ascending
    pub products: Vec<String>,
    /// Sorted ascending
    pub verticals: Vec<String>,
    /// In order of first appearance
    pub deployment_targets: Vec<String>,
}

/// Collect every product, vertical and deployment target in the manifest
pub fn collect_inventory(manifest: &Manifest) -> Inventory {
    let mut products = IndexSet::new();
    let mut verticals = IndexSet::new();
    let mut deployment_targets = IndexSet::new();

    for record in &manifest.artifacts {
        if let Some(tags) = &record.products {
            products.extend(tags.iter().cloned());
        }
        if let Some(tags) = &record.verticals {
            verticals.extend(tags.iter().cloned());
        }
        if let Some(target) = &record.deployment_target {
            deployment_targets.insert(target.clone());
        }
    }

    products.sort();
    verticals.sort();

    Inventory {
        products: products.into_iter().collect(),
        verticals: verticals.into_iter().collect(),
        deployment_targets: deployment_targets.into_iter().collect(),
    }
}

impl Inventory {
    /// Write `products_master.out` and `verticals_master.out` into `dir`
    pub fn write_master_lists(&self, dir: &Path) -> Result<(), ReportError> {
        write_lines(&dir.join(PRODUCTS_MASTER_FILE), &self.products)?;
        write_lines(&dir.join(VERTICALS_MASTER_FILE), &self.verticals)?;

        info!(
            "Wrote {} products and {} verticals to {:?}",
            self.products.len(),
            self.verticals.len(),
            dir
        );
        Ok(())
    }
}

fn write_lines(path: &Path, lines: &[String]) -> Result<(), ReportError> {
    std::fs::write(path, lines.join("\n")).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
