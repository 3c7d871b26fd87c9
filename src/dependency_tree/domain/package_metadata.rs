use indexmap::IndexMap;

/// Requested version meaning "whatever the registry tags as latest"
pub const LATEST_TAG: &str = "latest";

/// Resolved record for one package at one concrete version.
///
/// Built fresh for every registry lookup and discarded once the tree node
/// for it has been constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    name: String,
    resolved_version: String,
    dependencies: IndexMap<String, String>,
}

impl PackageMetadata {
    pub fn new(
        name: String,
        resolved_version: String,
        dependencies: IndexMap<String, String>,
    ) -> Self {
        Self {
            name,
            resolved_version,
            dependencies,
        }
    }

    /// Name as requested by the caller (not normalized)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolved_version(&self) -> &str {
        &self.resolved_version
    }

    /// Declared dependencies in registry declaration order
    pub fn dependencies(&self) -> &IndexMap<String, String> {
        &self.dependencies
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
