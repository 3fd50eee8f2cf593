//! Volume loading for the image tool
//!
//! Loaders are keyed by [`FormatTag`]. Numpy `.npy` files and raw
//! little-endian `f64` dumps are backed; the other tags are offered in the
//! load dialog but fail with [`LoadError::UnsupportedFormat`].

pub mod config;
pub mod demo;
pub mod format;
pub mod sources;

use std::path::PathBuf;
use thiserror::Error;

// Re-exports
pub use config::LoadRequest;
pub use demo::synthetic_volume;
pub use format::FormatTag;
pub use sources::{LoaderRegistry, NpyLoader, RawLoader, VolumeLoader};

/// Errors that can occur while loading a volume
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Please enter a file name!")]
    EmptyInput,

    #[error("Could not find the file: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("No loader available for {0} files")]
    UnsupportedFormat(FormatTag),

    #[error("{0} files need a shape (Nx, Ny, Nz)")]
    ShapeHintRequired(FormatTag),

    #[error("Expected {expected} samples but the file holds {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;
