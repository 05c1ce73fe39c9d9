use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the graph was built and rendered (cycles are reported, not fatal)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration error, repository error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for graph exploration.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("No package name given.\n\n💡 Hint: Pass --package <NAME> or set package_name in the configuration file")]
    MissingPackageName,

    #[error("Test mode requires a repository file.\n\n💡 Hint: Pass --repository <PATH> or set repository in the configuration file")]
    MissingRepository,

    #[error("Invalid mode: {value}\n\n💡 Hint: Please specify 'test', 'nuget' or 'apt'")]
    InvalidMode { value: String },

    #[error("Invalid max_depth: {value}\n\n💡 Hint: max_depth must be a non-negative integer (0 = unlimited)")]
    InvalidMaxDepth { value: i64 },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Test repository not found: {path}\n\n💡 Hint: Please verify the path passed via --repository or the repository config key")]
    RepositoryNotFound { path: PathBuf },

    #[error("Failed to parse test repository: {path}\nDetails: {details}\n\n💡 Hint: The repository file must be a JSON object mapping package names to dependency arrays")]
    RepositoryParseError { path: PathBuf, details: String },

    #[error("apt mode is not available on this system.\n\n💡 Hint: apt mode requires an Ubuntu/Debian environment with apt-cache installed; use --mode test or --mode nuget otherwise")]
    AptUnavailable,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for domain values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
