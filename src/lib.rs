//! npm-deptree - Dependency tree resolver for npm packages
//!
//! This library reconstructs the dependency tree of an npm package from the
//! registry's package documents, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_tree`): Tree model, version selection and resolution services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_deptree::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let registry = NpmRegistryClient::new()?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ResolveTreeUseCase::new(registry, progress_reporter);
//!
//! // Execute
//! let request = TreeRequest::new("express".to_string(), None, Some(2));
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let output = JsonFormatter::new().format_tree(&response.tree)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{ConcurrencyLimitedRegistry, NpmRegistryClient};
    pub use crate::application::dto::{
        OutdatedRequest, OutdatedResponse, OutputFormat, TreeRequest, TreeResponse,
    };
    pub use crate::application::use_cases::{CheckOutdatedUseCase, ResolveTreeUseCase};
    pub use crate::dependency_tree::domain::{
        OutdatedDependency, PackageDocument, PackageMetadata, TreeNode,
    };
    pub use crate::dependency_tree::policies::VersionSelection;
    pub use crate::dependency_tree::services::{OutdatedChecker, TreeBuilder};
    pub use crate::ports::outbound::{
        DependencySection, ManifestReader, OutdatedFormatter, OutputPresenter, PackageRegistry,
        ProgressReporter, TreeFormatter,
    };
    pub use crate::shared::error::{DeptreeError, ResolveError};
    pub use crate::shared::Result;
}
