use std::path::PathBuf;

use crate::config::Configuration;
use crate::core::{BundleRegistry, ResourceModel, scan_files};
use crate::error::Result;

/// Output of a successful run.
#[derive(Debug)]
pub struct GenerateResult {
    pub model: ResourceModel,
    /// Resource files read, in scan order.
    pub files: Vec<PathBuf>,
}

/// Scans every source root, groups the files into bundles and optionally validates them.
///
/// The registry is fresh for each call. Any error aborts the run.
pub fn generate(config: &Configuration) -> Result<GenerateResult> {
    let mut files = Vec::new();
    for root in config.source_roots() {
        files.extend(scan_files(root, config.filter())?);
    }

    let mut registry = BundleRegistry::new();
    for file in &files {
        registry.add_resource_file(file, config)?;
    }

    if config.validate_locales() {
        registry.validate()?;
    }

    Ok(GenerateResult {
        model: ResourceModel::new(config.root_name().clone(), registry),
        files,
    })
}
