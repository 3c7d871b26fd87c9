use crate::dependency_tree::domain::PackageDocument;
use crate::ports::outbound::PackageRegistry;
use crate::shared::error::ResolveError;
use async_trait::async_trait;
use reqwest::{header, StatusCode};
use std::time::Duration;

/// NpmRegistryClient adapter for fetching package documents from an npm registry
///
/// This adapter implements the PackageRegistry port over the registry's
/// JSON API (`GET <registry>/<name>`). One request per lookup: no retries
/// and no caching.
///
/// # Timeouts
/// Every request is bounded by the configured timeout (5 seconds by
/// default) so a stalled registry cannot hang a resolution forever.
pub struct NpmRegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistryClient {
    pub const DEFAULT_REGISTRY_URL: &'static str = "https://registry.npmjs.org";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

    /// Creates a client for the public npm registry with default configuration
    pub fn new() -> anyhow::Result<Self> {
        Self::with_options(
            Self::DEFAULT_REGISTRY_URL,
            Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Creates a client for `base_url` with a per-request `timeout`
    pub fn with_options(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("npm-deptree/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Encodes a package name for use as a single URL path segment
    ///
    /// The scope marker of a scoped name stays literal while its slash is
    /// encoded: `@types/node` becomes `@types%2Fnode`.
    pub fn encode_package_name(name: &str) -> String {
        urlencoding::encode(name).replacen("%40", "@", 1)
    }

    fn document_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, Self::encode_package_name(name))
    }
}

#[async_trait]
impl PackageRegistry for NpmRegistryClient {
    async fn fetch_package_document(&self, name: &str) -> Result<PackageDocument, ResolveError> {
        if name.trim().is_empty() {
            return Err(ResolveError::registry(name, "package name must not be empty"));
        }

        let url = self.document_url(name);
        tracing::debug!(%url, "fetching package document");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ResolveError::registry(name, e.to_string()))?;

        let status = response.status();
        tracing::debug!(%url, %status, "registry responded");

        if status == StatusCode::NOT_FOUND {
            return Err(ResolveError::not_found(name, "latest"));
        }
        if !status.is_success() {
            return Err(ResolveError::registry(
                name,
                format!("registry returned status code {}", status),
            ));
        }

        response
            .json::<PackageDocument>()
            .await
            .map_err(|e| {
                ResolveError::registry(name, format!("invalid registry document: {}", e))
            })
    }
}
