pub mod outdated_dependency;
pub mod package_document;
pub mod package_metadata;
pub mod tree_node;

pub use outdated_dependency::OutdatedDependency;
pub use package_document::{DistTags, PackageDocument, VersionManifest};
pub use package_metadata::{PackageMetadata, LATEST_TAG};
pub use tree_node::{NodeData, TreeNode, NOT_FOUND_VERSION};
