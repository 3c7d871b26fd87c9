use crate::application::dto::{OutdatedRequest, OutdatedResponse};
use crate::dependency_tree::services::OutdatedChecker;
use crate::ports::outbound::{ManifestReader, PackageRegistry, ProgressReporter};
use crate::shared::Result;

/// CheckOutdatedUseCase - Compares a project's declared dependencies
/// against the registry's latest versions
///
/// # Type Parameters
/// * `M` - ManifestReader implementation
/// * `R` - PackageRegistry implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckOutdatedUseCase<M, R, PR> {
    manifest_reader: M,
    registry: R,
    progress_reporter: PR,
}

impl<M, R, PR> CheckOutdatedUseCase<M, R, PR>
where
    M: ManifestReader,
    R: PackageRegistry,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: M, registry: R, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            registry,
            progress_reporter,
        }
    }

    /// Executes the outdated check
    ///
    /// # Errors
    /// Returns an error if package.json cannot be read or the requested
    /// section declares no dependencies. Individual lookup failures are
    /// reported as `Error` entries instead.
    pub async fn execute(&self, request: OutdatedRequest) -> Result<OutdatedResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading package.json from: {}",
            request.project_path.display()
        ));

        let dependencies = self
            .manifest_reader
            .read_dependencies(&request.project_path, request.section)?;

        if dependencies.is_empty() {
            anyhow::bail!("No dependencies provided");
        }

        self.progress_reporter.report(&format!(
            "🔍 Checking {} {} against the registry...",
            dependencies.len(),
            request.section.key()
        ));

        let checker = OutdatedChecker::new(&self.registry);
        let response = OutdatedResponse::new(checker.check(&dependencies).await);

        let errors = response.error_count();
        if errors > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Could not look up {} package(s)",
                errors
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "{} of {} dependencies need an update",
            response.outdated_count(),
            response.dependencies.len()
        ));

        Ok(response)
    }
}
