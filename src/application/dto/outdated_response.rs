use crate::dependency_tree::domain::OutdatedDependency;

/// OutdatedResponse - Response DTO from the outdated-dependency check
#[derive(Debug, Clone)]
pub struct OutdatedResponse {
    /// One entry per declared dependency, in manifest order
    pub dependencies: Vec<OutdatedDependency>,
}

impl OutdatedResponse {
    pub fn new(dependencies: Vec<OutdatedDependency>) -> Self {
        Self { dependencies }
    }

    pub fn outdated_count(&self) -> usize {
        self.dependencies.iter().filter(|d| d.needs_update).count()
    }

    pub fn error_count(&self) -> usize {
        self.dependencies.iter().filter(|d| d.is_error()).count()
    }
}
