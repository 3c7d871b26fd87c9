/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry, file system, console).
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod package_registry;
pub mod progress_reporter;

pub use formatter::{OutdatedFormatter, TreeFormatter};
pub use manifest_reader::{DependencySection, ManifestReader};
pub use output_presenter::OutputPresenter;
pub use package_registry::PackageRegistry;
pub use progress_reporter::ProgressReporter;
