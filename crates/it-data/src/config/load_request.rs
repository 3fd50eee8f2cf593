//! Description of a single load

use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::format::FormatTag;
use crate::{LoadError, LoadResult};

/// What the user asked to load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Path to the file
    pub path: PathBuf,

    /// Selected format
    pub format: FormatTag,

    /// Nx, Ny, Nz for formats without a header; trailing zeros lower the rank
    pub shape_hint: Option<[usize; 3]>,
}

impl LoadRequest {
    /// Create a request without a shape hint
    pub fn new(path: impl Into<PathBuf>, format: FormatTag) -> Self {
        Self {
            path: path.into(),
            format,
            shape_hint: None,
        }
    }

    pub fn with_shape_hint(mut self, hint: [usize; 3]) -> Self {
        self.shape_hint = Some(hint);
        self
    }

    /// Get the file name
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }

    /// Check the request before any file is opened
    pub fn validate(&self) -> LoadResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(LoadError::EmptyInput);
        }
        if !self.path.is_file() {
            return Err(LoadError::SourceNotFound(self.path.clone()));
        }
        Ok(())
    }

    /// Shape to impose on headerless data. Trailing zero entries are
    /// dropped; a zero before a non-zero entry is rejected.
    pub fn hinted_shape(&self) -> LoadResult<Vec<usize>> {
        let mut shape: Vec<usize> = self.shape_hint.iter().flatten().copied().collect();
        while shape.last() == Some(&0) {
            shape.pop();
        }
        if shape.is_empty() {
            return Err(LoadError::ShapeHintRequired(self.format));
        }
        if shape.contains(&0) {
            return Err(LoadError::InvalidData(format!(
                "shape hint {:?} has a zero before a non-zero extent",
                self.shape_hint.unwrap_or_default()
            )));
        }
        Ok(shape)
    }
}
