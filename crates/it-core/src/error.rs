use thiserror::Error;

use crate::axis::Axis;

/// Errors raised by the volume and slicing core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The array is not rank 2 or 3, or has an empty axis
    #[error("Can't convert data of shape {shape:?} to 3 dimensional data")]
    UnsupportedShape { shape: Vec<usize> },

    /// A cursor index escaped the volume bounds
    #[error("Index {index} out of range for axis {axis} (length {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
