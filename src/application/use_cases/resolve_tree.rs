use crate::application::dto::{TreeRequest, TreeResponse};
use crate::dependency_tree::services::TreeBuilder;
use crate::ports::outbound::{PackageRegistry, ProgressReporter};
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 100;

/// ResolveTreeUseCase - Builds the dependency tree of a single package
///
/// # Type Parameters
/// * `R` - PackageRegistry implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveTreeUseCase<R, PR> {
    registry: R,
    progress_reporter: PR,
}

impl<R, PR> ResolveTreeUseCase<R, PR>
where
    R: PackageRegistry,
    PR: ProgressReporter,
{
    pub fn new(registry: R, progress_reporter: PR) -> Self {
        Self {
            registry,
            progress_reporter,
        }
    }

    /// Executes the dependency tree use case
    ///
    /// # Errors
    /// - `DeptreeError::Validation` for an empty package name
    /// - `ResolveError::NotFound` (unwrapped) when the root package or
    ///   version does not exist
    /// - `ResolveError::Resolution` for any other failure in the tree
    pub async fn execute(&self, request: TreeRequest) -> Result<TreeResponse> {
        request.validate()?;

        self.progress_reporter.report(&format!(
            "🔍 Resolving {}@{} (depth {})",
            request.package_name, request.version, request.depth
        ));

        let spinner = if request.show_progress {
            Some(Self::start_spinner(&request)?)
        } else {
            None
        };

        let builder = TreeBuilder::new(&self.registry);
        let result = builder
            .build_tree(&request.package_name, &request.version, request.depth)
            .await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let tree = result?;
        let lookups = builder.lookup_count();

        let missing = tree.not_found_count();
        if missing > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} dependenc{} could not be found in the registry",
                missing,
                if missing == 1 { "y" } else { "ies" }
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "Resolved {} node(s) with {} registry lookup(s)",
            tree.node_count(),
            lookups
        ));

        Ok(TreeResponse::new(tree, lookups))
    }

    fn start_spinner(request: &TreeRequest) -> Result<ProgressBar> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("   {spinner:.green} {msg}")?);
        spinner.set_message(format!("Fetching {} from the registry", request.package_name));
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Ok(spinner)
    }
}
