use crate::dependency_tree::domain::TreeNode;

/// TreeResponse - Response DTO from the dependency tree use case
#[derive(Debug, Clone)]
pub struct TreeResponse {
    /// The resolved tree; may contain "Not Found" stubs
    pub tree: TreeNode,
    /// Registry lookups issued while building the tree
    pub lookups: usize,
}

impl TreeResponse {
    pub fn new(tree: TreeNode, lookups: usize) -> Self {
        Self { tree, lookups }
    }
}
