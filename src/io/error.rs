//! Error types and context management for tiling operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid, engine, and export operations
#[derive(Debug)]
pub enum DiamondError {
    /// Mutation addressed a cell outside the grid's backing store
    OutOfBounds {
        /// Column of the rejected cell
        x: usize,
        /// Row of the rejected cell
        y: usize,
        /// Side length of the grid
        extent: usize,
    },

    /// A domino was placed on a cell that already holds one of the same color
    CellOccupied {
        /// Column of the cell
        x: usize,
        /// Row of the cell
        y: usize,
    },

    /// A domino was removed from a cell that holds none
    CellVacant {
        /// Column of the cell
        x: usize,
        /// Row of the cell
        y: usize,
    },

    /// The tiling no longer satisfies its structural invariant
    ///
    /// Raised when a shuffling step observes state that a valid preceding
    /// tiling cannot produce. The engine must be discarded afterwards.
    InvariantViolation {
        /// Step or check that detected the fault
        operation: &'static str,
        /// Description of the fault
        reason: String,
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

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
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

impl fmt::Display for DiamondError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y, extent } => {
                write!(
                    f,
                    "Cell ({x}, {y}) is outside the grid (extent {extent}x{extent})"
                )
            }
            Self::CellOccupied { x, y } => {
                write!(f, "Cell ({x}, {y}) already holds a domino")
            }
            Self::CellVacant { x, y } => {
                write!(f, "Cell ({x}, {y}) holds no domino")
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Tiling invariant violated during {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for DiamondError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl DiamondError {
    /// Whether this error stems from a grid-level cell precondition
    pub const fn is_cell_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. } | Self::CellOccupied { .. } | Self::CellVacant { .. }
        )
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, DiamondError>;

/// Promotes low-level grid errors into engine-level faults
pub trait WithContext<T> {
    /// Tag a failure with the shuffling step that observed it
    ///
    /// Cell precondition errors become [`DiamondError::InvariantViolation`]
    /// since a valid tiling never produces them; other errors pass through.
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<DiamondError>,
{
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| {
            let error = e.into();
            if error.is_cell_error() {
                invariant_violation(operation, &error)
            } else {
                error
            }
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DiamondError {
    DiamondError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> DiamondError {
    DiamondError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}
