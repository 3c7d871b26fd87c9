use serde::{Deserialize, Serialize};

/// Sentinel version carried by stub nodes for unresolvable dependencies
pub const NOT_FOUND_VERSION: &str = "Not Found";

const NODE_TYPE: &str = "dependency";

/// Display attributes of a node, grouped the way tree renderers expect them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    pub name: String,
    pub version: String,
}

/// A node in the resolved dependency tree.
///
/// `children` is `None` when the node was not expanded: the depth budget
/// ran out, the package declares no dependencies, or the node is a stub.
/// `expanded` is a rendering hint only and is always `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub key: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub data: NodeData,
    pub expanded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// A resolved node; `key` is `<name>@<resolved version>`.
    pub fn resolved(name: &str, version: &str) -> Self {
        Self {
            key: format!("{}@{}", name, version),
            node_type: NODE_TYPE.to_string(),
            data: NodeData {
                name: name.to_string(),
                version: version.to_string(),
            },
            expanded: true,
            children: None,
        }
    }

    /// A leaf standing in for a dependency the registry does not know.
    ///
    /// The key uses the requested range since nothing was resolved.
    pub fn not_found(name: &str, requested_range: &str) -> Self {
        Self {
            key: format!("{}@{}", name, requested_range),
            node_type: NODE_TYPE.to_string(),
            data: NodeData {
                name: name.to_string(),
                version: NOT_FOUND_VERSION.to_string(),
            },
            expanded: true,
            children: None,
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn version(&self) -> &str {
        &self.data.version
    }

    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn is_not_found(&self) -> bool {
        self.data.version == NOT_FOUND_VERSION
    }

    /// Total number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of stub nodes in this subtree
    pub fn not_found_count(&self) -> usize {
        usize::from(self.is_not_found())
            + self
                .children()
                .iter()
                .map(TreeNode::not_found_count)
                .sum::<usize>()
    }

    /// Number of levels below this node (0 for a leaf)
    pub fn height(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }
}
