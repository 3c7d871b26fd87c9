use crate::ports::outbound::{DependencySection, ManifestReader};
use crate::shared::error::DeptreeError;
use crate::shared::security::{validate_readable_file, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

const MANIFEST_FILENAME: &str = "package.json";

/// FileSystemReader adapter for reading a project's package.json
///
/// This adapter implements the ManifestReader port. Symlinked or oversized
/// manifests are refused before any content is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_dependencies(
        &self,
        project_path: &Path,
        section: DependencySection,
    ) -> Result<IndexMap<String, String>> {
        let manifest_path = project_path.join(MANIFEST_FILENAME);

        if !manifest_path.exists() {
            return Err(DeptreeError::ManifestNotFound {
                path: manifest_path,
                suggestion: format!(
                    "package.json does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of an npm project, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        validate_readable_file(&manifest_path, MANIFEST_FILENAME, MAX_MANIFEST_SIZE)?;

        let content = fs::read_to_string(&manifest_path).map_err(|e| DeptreeError::FileReadError {
            path: manifest_path.clone(),
            details: e.to_string(),
        })?;

        let manifest: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| DeptreeError::ManifestParseError {
                path: manifest_path.clone(),
                details: e.to_string(),
            })?;

        let Some(table) = manifest.get(section.key()) else {
            return Ok(IndexMap::new());
        };

        serde_json::from_value(table.clone()).map_err(|e| {
            DeptreeError::ManifestParseError {
                path: manifest_path,
                details: format!("\"{}\" must map names to version strings: {}", section.key(), e),
            }
            .into()
        })
    }
}
