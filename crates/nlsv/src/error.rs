//! Conversion errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting NLSV input to TSV output.
///
/// Record-length inconsistencies are not errors: they are reported as
/// [`LengthMismatch`](crate::validation::LengthMismatch) warnings and the
/// conversion carries on.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file does not exist.
    #[error("Input file '{}' not found", path.display())]
    InputNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The input cannot be read, or the output cannot be written, by the caller.
    #[error("Permission denied to access file '{}'", path.display())]
    PermissionDenied {
        /// Path that was refused.
        path: PathBuf,
    },

    /// Opening a file failed for some other reason.
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        /// Path being opened.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while reading or writing (includes invalid UTF-8 input).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the TSV writer.
    #[error("TSV write error: {0}")]
    Csv(#[from] csv::Error),
}

impl ConvertError {
    /// Returns `true` for the anticipated failures that a caller reports and
    /// then treats as a finished run: a missing input or a permission problem.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::InputNotFound { .. } | Self::PermissionDenied { .. })
    }
}

/// Convenience alias for `Result` with [`ConvertError`].
pub type ConvertResult<T> = Result<T, ConvertError>;
