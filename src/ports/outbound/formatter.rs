use crate::dependency_tree::domain::{OutdatedDependency, TreeNode};
use crate::shared::Result;

/// TreeFormatter port for rendering a resolved dependency tree
pub trait TreeFormatter {
    /// Formats the tree rooted at `tree`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_tree(&self, tree: &TreeNode) -> Result<String>;
}

/// OutdatedFormatter port for rendering an outdated-dependency report
pub trait OutdatedFormatter {
    fn format_outdated(&self, dependencies: &[OutdatedDependency]) -> Result<String>;
}
