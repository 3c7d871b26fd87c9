use crate::dependency_tree::domain::{PackageDocument, PackageMetadata};
use crate::dependency_tree::policies::VersionSelection;
use crate::shared::error::ResolveError;
use async_trait::async_trait;

/// PackageRegistry port for looking up package metadata
///
/// This port abstracts the remote registry (e.g., registry.npmjs.org).
/// Errors are typed so callers can tell a missing package apart from a
/// broken registry.
///
/// # Async Support
/// Implementations must be `Send + Sync`: the tree builder issues many
/// lookups concurrently through a shared reference.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Fetches the full metadata document of a package
    ///
    /// # Errors
    /// - `ResolveError::NotFound` if the registry does not know the package
    /// - `ResolveError::Registry` for any other failure (network, status, body)
    async fn fetch_package_document(&self, name: &str) -> Result<PackageDocument, ResolveError>;

    /// Fetches a package and resolves `version` against its document
    ///
    /// This is a convenience method that fetches the raw document and
    /// applies the version selection policy.
    ///
    /// # Arguments
    /// * `name` - Name of the package
    /// * `version` - Exact version, range, or `latest`
    async fn fetch_package_info(
        &self,
        name: &str,
        version: &str,
    ) -> Result<PackageMetadata, ResolveError> {
        let document = self
            .fetch_package_document(name)
            .await
            .map_err(|e| match e {
                // Report the version that was asked for
                ResolveError::NotFound { name, .. } => ResolveError::NotFound {
                    name,
                    version: version.to_string(),
                },
                other => other,
            })?;
        VersionSelection::resolve(&document, name, version)
    }
}
