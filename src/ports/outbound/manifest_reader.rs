use crate::shared::Result;
use indexmap::IndexMap;
use std::path::Path;

/// Which dependency table of package.json to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencySection {
    Dependencies,
    DevDependencies,
}

impl DependencySection {
    pub fn key(self) -> &'static str {
        match self {
            DependencySection::Dependencies => "dependencies",
            DependencySection::DevDependencies => "devDependencies",
        }
    }
}

/// ManifestReader port for reading declared dependencies of a project
pub trait ManifestReader {
    /// Reads `name -> version` pairs from the project's package.json
    ///
    /// # Arguments
    /// * `project_path` - Directory containing package.json
    /// * `section` - Dependency table to read
    ///
    /// # Returns
    /// Declared dependencies in file order; empty if the table is absent
    ///
    /// # Errors
    /// Returns an error if package.json is missing, unreadable or not valid JSON
    fn read_dependencies(
        &self,
        project_path: &Path,
        section: DependencySection,
    ) -> Result<IndexMap<String, String>>;
}
