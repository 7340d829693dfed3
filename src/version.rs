use std::path::Path;

use serde::Deserialize;

use crate::error::{ClaudebarError, Result};
use crate::layout::Layout;

/// Supplies the version string shown by `--version`.
pub trait VersionSource {
    fn version(&self, layout: &Layout) -> Result<String>;
}

/// Reads the version from the `package.json` shipped at the installation root.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageManifest;

#[derive(Debug, Deserialize)]
struct PackageJson {
    version: String,
}

impl VersionSource for PackageManifest {
    fn version(&self, layout: &Layout) -> Result<String> {
        read_version(&layout.manifest_path())
    }
}

/// Parses the `version` field out of a package descriptor.
pub fn read_version(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|source| ClaudebarError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    let package: PackageJson =
        serde_json::from_str(&content).map_err(|source| ClaudebarError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(package.version)
}
