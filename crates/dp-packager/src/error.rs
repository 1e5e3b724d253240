use std::path::PathBuf;
use std::process::ExitStatus;

/// Convenient Result alias.
pub type PackagerResult<T> = Result<T, PackagerError>;

/// Packager error type.
#[derive(Debug, thiserror::Error)]
pub enum PackagerError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to launch archiver `{program}`: {source}")]
    ArchiverLaunch {
        program: String,
        source: std::io::Error,
    },

    #[error("Archiver `{program}` exited with {status}: {stderr}")]
    ArchiverFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl PackagerError {
    /// Archive-step failures are caught at the binary boundary and turned
    /// into a controlled exit; every other error propagates as a fault.
    pub fn is_archive_failure(&self) -> bool {
        matches!(
            self,
            Self::ArchiverLaunch { .. } | Self::ArchiverFailed { .. }
        )
    }
}
