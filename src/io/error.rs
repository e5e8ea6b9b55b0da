//! Error types and context management for game operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all game operations
#[derive(Debug)]
pub enum GameError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A nonzero cell holds a value that is not a power of two of at least 2
    InvalidTile {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// The rejected value
        value: u64,
    },

    /// Row data does not describe a square board
    DimensionMismatch {
        /// Length every row was expected to have
        expected: usize,
        /// Length actually found
        found: usize,
    },

    /// Failed to encode or save a board snapshot
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

    /// Terminal setup, drawing, or event read failed
    Terminal {
        /// Description of the terminal operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTile { row, col, value } => {
                write!(
                    f,
                    "Invalid tile value {value} at ({row}, {col}): must be 0 or a power of two >= 2"
                )
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Board is not square: expected row length {expected}, found {found}"
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
            Self::Terminal { operation, source } => {
                write!(f, "Terminal error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Terminal { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for game results
pub type Result<T> = std::result::Result<T, GameError>;

/// Attaches the failing terminal operation to raw I/O errors
pub trait WithOperation<T> {
    /// Wrap an I/O failure as a [`GameError::Terminal`] naming the operation
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation attached
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> WithOperation<T> for std::result::Result<T, std::io::Error> {
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| GameError::Terminal { operation, source })
    }
}

impl From<image::ImageError> for GameError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GameError {
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
) -> GameError {
    GameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
