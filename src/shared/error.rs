use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a missing package from
/// other kinds of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the tree (possibly with "Not Found" stubs) was produced
    Success = 0,
    /// The requested root package or version does not exist in the registry
    PackageNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (registry error, resolution failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Classifies an application error into an exit code.
    ///
    /// Only a `NotFound` at the top of the chain maps to `PackageNotFound`;
    /// a `NotFound` buried inside a `Resolution` wrapper is an internal failure.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ResolveError>() {
            Some(ResolveError::NotFound { .. }) => ExitCode::PackageNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PackageNotFound => write!(f, "Package Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Classified failures of registry lookups and tree resolution.
///
/// `NotFound` is the only variant that is ever absorbed (into a stub node,
/// by the parent expanding a dependency). Everything else propagates.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Package not found: {name}@{version}")]
    NotFound { name: String, version: String },

    #[error("Registry request failed for {name}: {details}")]
    Registry { name: String, details: String },

    #[error("Failed to build dependency tree for {name}@{version}")]
    Resolution {
        name: String,
        version: String,
        #[source]
        source: Box<ResolveError>,
    },
}

impl ResolveError {
    pub fn not_found(name: &str, version: &str) -> Self {
        ResolveError::NotFound {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    pub fn registry(name: &str, details: impl Into<String>) -> Self {
        ResolveError::Registry {
            name: name.to_string(),
            details: details.into(),
        }
    }

    /// Wraps an error with the package being assembled when it surfaced.
    pub fn resolution(name: &str, version: &str, source: ResolveError) -> Self {
        ResolveError::Resolution {
            name: name.to_string(),
            version: version.to_string(),
            source: Box::new(source),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}

/// Application-specific errors for file and input handling.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum DeptreeError {
    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory with --path")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("package.json not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse package.json: {path}\nDetails: {details}\n\n💡 Hint: Please verify that package.json contains valid JSON")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
