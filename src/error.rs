use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while planning or executing a reorganization.
///
/// `PathNotFound`, `NotADirectory` and `ScanFailed` abort the run before any
/// file is touched. `FolderCreationFailed` and `MoveFailed` are recorded in the
/// run report and the run continues.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Directory '{}' does not exist", path.display())]
    PathNotFound { path: PathBuf },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory {}: {source}", path.display())]
    ScanFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create folder {}: {source}", path.display())]
    FolderCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to move {} to {}: {source}", source_path.display(), destination.display())]
    MoveFailed {
        source_path: PathBuf,
        destination: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for organization operations.
pub type OrganizeResult<T> = std::result::Result<T, OrganizeError>;

impl OrganizeError {
    /// Process exit code for an error that ends the run.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::PathNotFound { .. } => 2,
            Self::NotADirectory { .. } => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let missing = OrganizeError::PathNotFound {
            path: PathBuf::from("/missing"),
        };
        let not_dir = OrganizeError::NotADirectory {
            path: PathBuf::from("/etc/hosts"),
        };
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(not_dir.exit_code(), 3);
    }

    #[test]
    fn test_move_failed_message_has_context() {
        let err = OrganizeError::MoveFailed {
            source_path: PathBuf::from("/data/a.txt"),
            destination: PathBuf::from("/data/Documents/a.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/data/a.txt"));
        assert!(message.contains("/data/Documents/a.txt"));
        assert!(message.contains("permission denied"));
        assert_eq!(err.exit_code(), 1);
    }
}
