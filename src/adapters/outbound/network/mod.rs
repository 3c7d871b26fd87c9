/// Network adapters for registry access
mod concurrency_limited_registry;
mod npm_registry_client;

pub use concurrency_limited_registry::ConcurrencyLimitedRegistry;
pub use npm_registry_client::NpmRegistryClient;
