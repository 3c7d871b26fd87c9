mod cli;

use clap::Parser;
use cli::{Args, Command, OutdatedArgs, TreeArgs};
use npm_deptree::adapters::outbound::console::StderrProgressReporter;
use npm_deptree::adapters::outbound::filesystem::FileSystemReader;
use npm_deptree::adapters::outbound::network::{ConcurrencyLimitedRegistry, NpmRegistryClient};
use npm_deptree::application::dto::{OutdatedRequest, TreeRequest};
use npm_deptree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use npm_deptree::application::use_cases::{CheckOutdatedUseCase, ResolveTreeUseCase};
use npm_deptree::config::{self, Overrides, Settings};
use npm_deptree::ports::outbound::{DependencySection, ProgressReporter};
use npm_deptree::shared::error::{DeptreeError, ExitCode};
use npm_deptree::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n{} An error occurred:\n", "❌".red());
        eprintln!("{}", e.to_string().red().bold());

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn init_logging(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("DEPTREE_LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();
}

async fn run(args: Args) -> Result<()> {
    let quiet = args.quiet;
    let config_path = args.config;

    match args.command {
        Command::Tree(tree) => {
            let settings = load_settings(config_path.as_deref(), tree.overrides())?;
            run_tree(tree, settings, quiet).await
        }
        Command::Outdated(outdated) => {
            let settings = load_settings(config_path.as_deref(), outdated.overrides())?;
            run_outdated(outdated, settings, quiet).await
        }
    }
}

fn load_settings(config_path: Option<&Path>, overrides: Overrides) -> Result<Settings> {
    let config_file = match config_path {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    Settings::resolve(overrides, config_file.as_ref())
}

fn progress_reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

fn create_registry(settings: &Settings) -> Result<ConcurrencyLimitedRegistry<NpmRegistryClient>> {
    tracing::debug!(
        registry = %settings.registry_url,
        timeout_secs = settings.timeout.as_secs(),
        max_concurrency = ?settings.max_concurrency,
        "creating registry client"
    );
    let client = NpmRegistryClient::with_options(&settings.registry_url, settings.timeout)?;
    Ok(ConcurrencyLimitedRegistry::new(
        client,
        settings.max_concurrency,
    ))
}

async fn run_tree(args: TreeArgs, settings: Settings, quiet: bool) -> Result<()> {
    // Create adapters (Dependency Injection)
    let registry = create_registry(&settings)?;
    let use_case = ResolveTreeUseCase::new(registry, progress_reporter(quiet));

    let mut request = TreeRequest::new(args.package, args.version, Some(settings.depth));
    if quiet {
        request = request.without_progress();
    }

    let response = use_case.execute(request).await?;

    progress_reporter(quiet).report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create_tree_formatter(settings.format);
    let formatted_output = formatter.format_tree(&response.tree)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

async fn run_outdated(args: OutdatedArgs, settings: Settings, quiet: bool) -> Result<()> {
    let project_path = args.path.unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let section = if args.dev {
        DependencySection::DevDependencies
    } else {
        DependencySection::Dependencies
    };

    let registry = create_registry(&settings)?;
    let use_case =
        CheckOutdatedUseCase::new(FileSystemReader::new(), registry, progress_reporter(quiet));
    let response = use_case
        .execute(OutdatedRequest::new(project_path, section))
        .await?;

    progress_reporter(quiet).report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create_outdated_formatter(settings.format);
    let formatted_output = formatter.format_outdated(&response.dependencies)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeptreeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| DeptreeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(DeptreeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DeptreeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
