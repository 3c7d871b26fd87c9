use crate::dependency_tree::domain::TreeNode;
use crate::ports::outbound::PackageRegistry;
use crate::shared::error::ResolveError;
use futures::future::{join_all, BoxFuture, FutureExt};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// TreeBuilder expands a package into a depth-bounded dependency tree.
///
/// Every occurrence of a package is looked up again; nothing is shared
/// between branches, and a dependency cycle is simply re-expanded until the
/// depth budget runs out. Fan-out per node is unbounded; wrap the registry
/// in a `ConcurrencyLimitedRegistry` to cap in-flight lookups.
pub struct TreeBuilder<'r, R: PackageRegistry> {
    registry: &'r R,
    lookups: AtomicUsize,
}

impl<'r, R: PackageRegistry> TreeBuilder<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        Self {
            registry,
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of registry lookups issued so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Resolves `name@version` and, while `depth > 0`, its dependencies.
    ///
    /// `depth = 0` resolves the node itself without expanding children.
    ///
    /// # Errors
    /// - `NotFound` when this package (or version) does not exist; the
    ///   parent decides whether that becomes a stub
    /// - `Resolution` wrapping any other failure, from this node's own
    ///   lookup or from a child, annotated with this node's name/version
    pub fn build_tree<'a>(
        &'a self,
        name: &'a str,
        version: &'a str,
        depth: u32,
    ) -> BoxFuture<'a, Result<TreeNode, ResolveError>> {
        async move {
            self.lookups.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(package = name, version, depth, "resolving package");

            let info = match self.registry.fetch_package_info(name, version).await {
                Ok(info) => info,
                Err(e) if e.is_not_found() => return Err(e),
                Err(e) => {
                    tracing::error!(
                        "Error building dependency tree for {}@{}: {}",
                        name,
                        version,
                        e
                    );
                    return Err(ResolveError::resolution(name, version, e));
                }
            };

            let node = TreeNode::resolved(name, info.resolved_version());
            if depth == 0 || !info.has_dependencies() {
                return Ok(node);
            }

            let children = self
                .expand_dependencies(info.dependencies(), depth - 1)
                .await
                .map_err(|e| ResolveError::resolution(name, version, e))?;

            Ok(node.with_children(children))
        }
        .boxed()
    }

    /// Resolves all declared dependencies concurrently.
    ///
    /// Results are collected in declaration order. A `NotFound` becomes a
    /// stub leaf; the first other error in declaration order fails the
    /// whole expansion once every sibling has settled.
    async fn expand_dependencies(
        &self,
        dependencies: &IndexMap<String, String>,
        depth: u32,
    ) -> Result<Vec<TreeNode>, ResolveError> {
        let children = dependencies.iter().map(|(dep_name, dep_range)| async move {
            match self.build_tree(dep_name, dep_range, depth).await {
                Err(e) if e.is_not_found() => {
                    tracing::debug!(package = %dep_name, range = %dep_range, "dependency not found, using stub");
                    Ok(TreeNode::not_found(dep_name, dep_range))
                }
                other => other,
            }
        });

        join_all(children).await.into_iter().collect()
    }
}
