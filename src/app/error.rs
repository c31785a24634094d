use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Classify an I/O failure against the path it happened on, so the
    /// alert shown to the user names the file instead of an errno.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => AppError::FileNotFound { path },
            io::ErrorKind::PermissionDenied => AppError::PermissionDenied { path },
            _ => AppError::Io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let app_err = AppError::from_io(io_err, Path::new("/tmp/missing.txt"));
        assert!(matches!(app_err, AppError::FileNotFound { .. }));
        assert_eq!(app_err.to_string(), "File not found: /tmp/missing.txt");
    }

    #[test]
    fn test_permission_denied_classification() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let app_err = AppError::from_io(io_err, Path::new("/etc/shadow"));
        assert!(matches!(app_err, AppError::PermissionDenied { .. }));
        assert!(app_err.to_string().contains("/etc/shadow"));
    }

    #[test]
    fn test_generic_io_fallback() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        let app_err = AppError::from_io(io_err, Path::new("/tmp/f.txt"));
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("truncated"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }
}
