use crate::dependency_tree::domain::LATEST_TAG;
use crate::shared::error::DeptreeError;
use crate::shared::Result;

/// Number of dependency levels expanded below the root when not specified
pub const DEFAULT_DEPTH: u32 = 2;

/// TreeRequest - Request DTO for the dependency tree use case
#[derive(Debug, Clone)]
pub struct TreeRequest {
    /// Package to resolve (required)
    pub package_name: String,
    /// Version, range or `latest`
    pub version: String,
    /// Maximum number of levels below the root
    pub depth: u32,
    /// Whether to draw a spinner while resolving
    pub show_progress: bool,
}

impl TreeRequest {
    pub fn new(package_name: String, version: Option<String>, depth: Option<u32>) -> Self {
        Self {
            package_name,
            version: version
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| LATEST_TAG.to_string()),
            depth: depth.unwrap_or(DEFAULT_DEPTH),
            show_progress: true,
        }
    }

    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.package_name.trim().is_empty() {
            return Err(DeptreeError::Validation {
                message: "Package name is required".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = TreeRequest::new("react".to_string(), None, None);
        assert_eq!(request.version, "latest");
        assert_eq!(request.depth, 2);
        assert!(request.show_progress);
    }

    #[test]
    fn test_blank_version_means_latest() {
        let request = TreeRequest::new("react".to_string(), Some(" ".to_string()), Some(0));
        assert_eq!(request.version, "latest");
        assert_eq!(request.depth, 0);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let request = TreeRequest::new("  ".to_string(), None, None);
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("Package name is required"));
    }
}
