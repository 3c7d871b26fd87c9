use indexmap::IndexMap;
use npm_deptree::prelude::*;
use std::path::Path;

/// Mock ManifestReader returning fixed dependency tables
#[derive(Default)]
pub struct MockManifestReader {
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dependency(mut self, name: &str, version: &str) -> Self {
        self.dependencies
            .insert(name.to_string(), version.to_string());
        self
    }

    pub fn with_dev_dependency(mut self, name: &str, version: &str) -> Self {
        self.dev_dependencies
            .insert(name.to_string(), version.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_dependencies(
        &self,
        _project_path: &Path,
        section: DependencySection,
    ) -> Result<IndexMap<String, String>> {
        if self.should_fail {
            anyhow::bail!("Mock manifest reader failure");
        }
        Ok(match section {
            DependencySection::Dependencies => self.dependencies.clone(),
            DependencySection::DevDependencies => self.dev_dependencies.clone(),
        })
    }
}
