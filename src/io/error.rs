//! Error types and context management for pattern generation and persistence

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum StitchError {
    /// Failed to load or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid coordinates outside the pattern
    CellOutOfRange {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// Progress grid and pattern grid disagree on size
    DimensionMismatch {
        /// Pattern dimensions (width, height)
        expected: (usize, usize),
        /// Progress dimensions (width, height)
        actual: (usize, usize),
    },

    /// Pattern data violates a structural invariant
    CorruptPattern {
        /// Description of the violated invariant
        reason: String,
    },

    /// Failed to encode or decode persisted state
    Serialization {
        /// File or record involved
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Failed to save a rendered chart to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Computation could not produce a result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CellOutOfRange { x, y, dimensions } => {
                write!(
                    f,
                    "Cell ({x}, {y}) is outside the {}x{} grid",
                    dimensions.0, dimensions.1
                )
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Progress grid is {}x{} but pattern is {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::CorruptPattern { reason } => {
                write!(f, "Corrupt pattern: {reason}")
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to (de)serialize '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, StitchError>;

/// Attaches a path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`StitchError::FileSystem`] naming the path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| StitchError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<image::ImageError> for StitchError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for StitchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StitchError {
    StitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a corrupt pattern error
pub fn corrupt_pattern(reason: &impl ToString) -> StitchError {
    StitchError::CorruptPattern {
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> StitchError {
    StitchError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
