pub mod npy_source;
pub mod raw_source;

pub use npy_source::NpyLoader;
pub use raw_source::RawLoader;

use ahash::AHashMap;
use ndarray::ArrayD;
use tracing::{info, warn};

use crate::config::LoadRequest;
use crate::format::FormatTag;
use crate::{LoadError, LoadResult};

/// Reads an N-dimensional array of samples from a named resource
pub trait VolumeLoader: Send + Sync {
    /// Format this loader handles
    fn format(&self) -> FormatTag;

    /// Read the request's file. The request has already been validated.
    fn load(&self, request: &LoadRequest) -> LoadResult<ArrayD<f64>>;
}

/// Loaders keyed by format tag
pub struct LoaderRegistry {
    loaders: AHashMap<FormatTag, Box<dyn VolumeLoader>>,
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LoaderRegistry {
    /// Create a registry with no loaders
    pub fn empty() -> Self {
        Self {
            loaders: AHashMap::new(),
        }
    }

    /// Registry with every built-in loader
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(NpyLoader));
        registry.register(Box::new(RawLoader));
        registry
    }

    /// Add or replace the loader for its format
    pub fn register(&mut self, loader: Box<dyn VolumeLoader>) {
        self.loaders.insert(loader.format(), loader);
    }

    pub fn supports(&self, format: FormatTag) -> bool {
        self.loaders.contains_key(&format)
    }

    /// Validate and run a request
    pub fn load(&self, request: &LoadRequest) -> LoadResult<ArrayD<f64>> {
        request.validate()?;

        let loader = self
            .loaders
            .get(&request.format)
            .ok_or(LoadError::UnsupportedFormat(request.format))?;

        match loader.load(request) {
            Ok(array) => {
                info!("Loaded {} with shape {:?}", request.file_name(), array.shape());
                Ok(array)
            }
            Err(e) => {
                warn!("Failed to load {}: {}", request.file_name(), e);
                Err(e)
            }
        }
    }
}
