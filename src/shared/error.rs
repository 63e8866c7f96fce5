use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Process exit codes of `srclib-pydep`.
///
/// These codes let an orchestrator tell argument mistakes apart from
/// failures while listing or resolving dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (container failure, malformed lister output, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Value passed to `std::process::exit`
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

/// Errors raised while listing and resolving Python dependencies.
///
/// Uses thiserror to derive Display and Error; every variant converts into
/// `anyhow::Error` through `?` so callers can downcast when they need to.
#[derive(Debug, Error)]
pub enum PydepError {
    #[error("Failed to decode dependency lister output\nDetails: {details}\n\n💡 Hint: pydep-run.py must print a JSON array of requirement objects")]
    MalformedListerOutput { details: String },

    #[error("Unexpected target type for Python: {target_type}")]
    UnexpectedTargetType { target_type: String },

    #[error("Invalid {target_type} target payload\nDetails: {details}")]
    InvalidTargetPayload {
        target_type: String,
        details: String,
    },

    #[error("No dependency lister registered for unit type '{unit_type}'\n\n💡 Hint: Python source units use the unit type 'PipPackage'")]
    NoListerRegistered { unit_type: String },

    #[error("No dependency resolver registered for target type '{target_type}'")]
    NoResolverRegistered { target_type: String },

    #[error("Container {stage} failed ({status})\nDetails: {stderr}\n\n💡 Hint: Check that Docker is installed and the daemon is running")]
    ContainerFailed {
        stage: String,
        status: String,
        stderr: String,
    },

    #[error("Container run timed out after {timeout:?}\n\n💡 Hint: Raise docker.timeout_secs in the configuration file")]
    ContainerTimeout { timeout: Duration },

    #[error("Invalid source directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify the directory that contains the source unit")]
    InvalidSourceDirectory { path: PathBuf, reason: String },

    #[error("Cannot read input file: {path}\nDetails: {details}\n\n💡 Hint: Inputs must be regular JSON files, not directories or symbolic links")]
    FileReadError { path: PathBuf, details: String },

    #[error("Cannot write output file: {path}\nDetails: {details}\n\n💡 Hint: The parent directory must exist and the path must not be a symbolic link")]
    FileWriteError { path: PathBuf, details: String },

    #[error("No symbol kind mapping for '{kind}'")]
    UnknownSymbolKind { kind: String },
}
