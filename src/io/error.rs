//! Error types for grid construction, solver preconditions and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver and driver operations
///
/// A contradiction reached while solving is not an error; it is reported
/// through [`crate::algorithm::solver::Status`]. Every variant here is a
/// violated precondition or an environmental failure in the driver.
#[derive(Debug)]
pub enum WfcError {
    /// Constructor or operation received an unusable input
    InvalidArgument {
        /// Name of the invalid argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coordinate access outside the grid extent
    OutOfBounds {
        /// Requested column
        x: i64,
        /// Requested row
        y: i64,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Operation is not valid for the current domain state
    ///
    /// Occurs when:
    /// - The sole candidate of a non-collapsed domain is requested
    /// - A collapse is attempted on an empty domain
    InvalidState {
        /// Name of the operation that was attempted
        operation: &'static str,
        /// Description of the offending state
        reason: String,
    },

    /// Every solve attempt ended in a contradiction
    Unsolved {
        /// Number of attempts made
        attempts: usize,
    },

    /// Failed to encode or save a rendered image
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
}

impl fmt::Display for WfcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinates ({x}, {y}) are out of bounds (grid size {width}x{height})"
                )
            }
            Self::InvalidState { operation, reason } => {
                write!(f, "Invalid state for {operation}: {reason}")
            }
            Self::Unsolved { attempts } => {
                write!(f, "No solution found after {attempts} attempt(s)")
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
        }
    }
}

impl std::error::Error for WfcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, WfcError>;

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WfcError {
    WfcError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid state error
pub fn invalid_state(operation: &'static str, reason: &impl ToString) -> WfcError {
    WfcError::InvalidState {
        operation,
        reason: reason.to_string(),
    }
}
