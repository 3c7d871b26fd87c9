use crate::dependency_tree::domain::OutdatedDependency;
use crate::ports::outbound::PackageRegistry;
use futures::future::join_all;
use indexmap::IndexMap;

/// OutdatedChecker compares declared versions with the registry's latest tag.
///
/// Each dependency is an independent lookup; a failed lookup is reported
/// as an `Error` entry and never affects the others.
pub struct OutdatedChecker<'r, R: PackageRegistry> {
    registry: &'r R,
}

impl<'r, R: PackageRegistry> OutdatedChecker<'r, R> {
    pub fn new(registry: &'r R) -> Self {
        Self { registry }
    }

    /// Checks every dependency concurrently, returning results in input order
    pub async fn check(&self, dependencies: &IndexMap<String, String>) -> Vec<OutdatedDependency> {
        let lookups = dependencies
            .iter()
            .map(|(name, current)| self.check_one(name, current));
        join_all(lookups).await
    }

    async fn check_one(&self, name: &str, current: &str) -> OutdatedDependency {
        match self.registry.fetch_package_document(name).await {
            Ok(document) => match document.latest() {
                Some(latest) => OutdatedDependency::compare(name, current, latest),
                None => {
                    tracing::warn!("Registry document for {} has no latest tag", name);
                    OutdatedDependency::lookup_failed(name, current)
                }
            },
            Err(e) => {
                tracing::warn!("Error fetching data for {}: {}", name, e);
                OutdatedDependency::lookup_failed(name, current)
            }
        }
    }
}
