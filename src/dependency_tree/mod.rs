/// Dependency tree domain: registry documents, tree nodes, version
/// selection policy and the resolution services built on them.
pub mod domain;
pub mod policies;
pub mod services;
