use crate::dependency_tree::domain::PackageDocument;
use crate::ports::outbound::PackageRegistry;
use crate::shared::error::ResolveError;
use async_trait::async_trait;
use tokio::sync::Semaphore;

/// ConcurrencyLimitedRegistry wraps a PackageRegistry and caps in-flight lookups.
///
/// This adapter implements the decorator pattern: with a limit of N, at most
/// N document fetches run at once across the whole tree, no matter how
/// wide or deep it is. Without a limit it passes every call straight
/// through. A permit is held only while one fetch is in flight, never
/// across the recursion into children.
pub struct ConcurrencyLimitedRegistry<R: PackageRegistry> {
    inner: R,
    permits: Option<Semaphore>,
    max_in_flight: Option<usize>,
}

impl<R: PackageRegistry> ConcurrencyLimitedRegistry<R> {
    /// Creates a limiter around `inner`; `None` means unbounded.
    ///
    /// A limit of zero is treated as one.
    pub fn new(inner: R, max_in_flight: Option<usize>) -> Self {
        let max_in_flight = max_in_flight.map(|limit| limit.max(1));
        Self {
            inner,
            permits: max_in_flight.map(Semaphore::new),
            max_in_flight,
        }
    }

    pub fn max_in_flight(&self) -> Option<usize> {
        self.max_in_flight
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: PackageRegistry> PackageRegistry for ConcurrencyLimitedRegistry<R> {
    async fn fetch_package_document(&self, name: &str) -> Result<PackageDocument, ResolveError> {
        let Some(permits) = &self.permits else {
            return self.inner.fetch_package_document(name).await;
        };

        let _permit = permits
            .acquire()
            .await
            .map_err(|_| ResolveError::registry(name, "concurrency limiter was closed"))?;
        self.inner.fetch_package_document(name).await
    }
}
