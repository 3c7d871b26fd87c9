use crate::ports::outbound::DependencySection;
use std::path::PathBuf;

/// OutdatedRequest - Request DTO for the outdated-dependency check
#[derive(Debug, Clone)]
pub struct OutdatedRequest {
    /// Directory containing package.json
    pub project_path: PathBuf,
    /// Which dependency table to check
    pub section: DependencySection,
}

impl OutdatedRequest {
    pub fn new(project_path: PathBuf, section: DependencySection) -> Self {
        Self {
            project_path,
            section,
        }
    }
}
