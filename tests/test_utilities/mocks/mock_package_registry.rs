use async_trait::async_trait;
use npm_deptree::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Mock PackageRegistry with per-package latency and failure injection
///
/// Unknown packages answer `NotFound`, like a registry 404.
#[derive(Default)]
pub struct MockPackageRegistry {
    documents: HashMap<String, PackageDocument>,
    latencies: HashMap<String, Duration>,
    failures: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

#[allow(dead_code)]
impl MockPackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a package with its `latest` tag and versions in listing order
    pub fn with_package(
        mut self,
        name: &str,
        latest: Option<&str>,
        versions: Vec<(&str, Vec<(&str, &str)>)>,
    ) -> Self {
        self.documents
            .insert(name.to_string(), PackageDocument::new(latest, versions));
        self
    }

    /// Delays every lookup of `name`
    pub fn with_latency(mut self, name: &str, latency: Duration) -> Self {
        self.latencies.insert(name.to_string(), latency);
        self
    }

    /// Makes every lookup of `name` fail with a registry error
    pub fn with_failure(mut self, name: &str, details: &str) -> Self {
        self.failures.insert(name.to_string(), details.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|n| *n == name).count()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PackageRegistry for MockPackageRegistry {
    async fn fetch_package_document(
        &self,
        name: &str,
    ) -> std::result::Result<PackageDocument, ResolveError> {
        self.calls.lock().unwrap().push(name.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(latency) = self.latencies.get(name) {
            tokio::time::sleep(*latency).await;
        } else {
            tokio::task::yield_now().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(details) = self.failures.get(name) {
            return Err(ResolveError::registry(name, details.clone()));
        }
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::not_found(name, "latest"))
    }
}
