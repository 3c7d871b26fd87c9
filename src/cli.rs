use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use npm_deptree::application::dto::OutputFormat;
use npm_deptree::config::Overrides;
use std::path::PathBuf;

/// Resolve npm packages into dependency trees using the public registry
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(version)]
#[command(about = "Resolve npm packages into dependency trees", long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (defaults to ./deptree.config.yml if present)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dependency tree of a package
    Tree(TreeArgs),
    /// Compare a project's declared dependencies with the latest releases
    Outdated(OutdatedArgs),
}

/// Registry connection flags shared by all subcommands
#[derive(ClapArgs, Debug, Default)]
pub struct RegistryArgs {
    /// Registry base URL
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct TreeArgs {
    /// Package name, e.g. `react` or `@types/node`
    pub package: String,

    /// Version, range or dist-tag to resolve
    #[arg(short = 'V', long = "pkg-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Number of dependency levels to expand below the package
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Output format: json or text
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Maximum number of registry requests in flight at once
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct OutdatedArgs {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Check devDependencies instead of dependencies
    #[arg(long)]
    pub dev: bool,

    /// Output format: json or text
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

impl TreeArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            registry_url: self.registry.registry.clone(),
            timeout_secs: self.registry.timeout,
            max_concurrency: self.max_concurrency,
            depth: self.depth,
            format: self.format,
        }
    }
}

impl OutdatedArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            registry_url: self.registry.registry.clone(),
            timeout_secs: self.registry.timeout,
            format: self.format,
            ..Default::default()
        }
    }
}
