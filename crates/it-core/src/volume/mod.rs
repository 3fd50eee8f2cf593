//! Ownership of the backing volume
//!
//! The store adopts a whole new array on every load and never mutates the
//! current one in place. A rejected load leaves the previous volume,
//! display mode and bounds untouched.

use std::ops::RangeInclusive;
use ndarray::{Array3, ArrayD, Ix3};
use tracing::{info, warn};

mod dimensionality;

pub use dimensionality::{plan, DisplayMode, ShapePlan};

use crate::axis::Axis;
use crate::cursor::Position;
use crate::error::{CoreError, CoreResult};

/// The canonical 3D sample array
pub type Volume = Array3<f64>;

/// Inclusive per-axis index range `[0, N - 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    max: [usize; 3],
}

impl Bounds {
    /// Bounds for a shape with every axis of length at least one
    pub fn from_shape(shape: [usize; 3]) -> Self {
        Self {
            max: shape.map(|len| len.saturating_sub(1)),
        }
    }

    /// Largest valid index along `axis`
    pub fn max(&self, axis: Axis) -> usize {
        self.max[axis.index()]
    }

    pub fn range(&self, axis: Axis) -> RangeInclusive<usize> {
        0..=self.max(axis)
    }

    pub fn contains(&self, position: Position) -> bool {
        Axis::ALL
            .iter()
            .all(|axis| position[axis.index()] <= self.max(*axis))
    }
}

/// Holds the current volume and everything derived from its shape
#[derive(Debug, Clone)]
pub struct VolumeStore {
    volume: Option<Volume>,
    mode: DisplayMode,
    bounds: Option<Bounds>,
}

impl Default for VolumeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            volume: None,
            mode: DisplayMode::ThreeD,
            bounds: None,
        }
    }

    /// Create a store holding `array`
    pub fn with_array(array: ArrayD<f64>) -> CoreResult<Self> {
        let mut store = Self::new();
        store.replace(array)?;
        Ok(store)
    }

    /// Adopt a new rank-2 or rank-3 array.
    ///
    /// On failure the store keeps its previous state unchanged.
    pub fn replace(&mut self, array: ArrayD<f64>) -> CoreResult<DisplayMode> {
        let original_shape = array.shape().to_vec();
        let plan = match dimensionality::plan(&original_shape) {
            Ok(plan) => plan,
            Err(err) => {
                warn!("Rejected volume of shape {:?}: {}", original_shape, err);
                return Err(err);
            }
        };

        let array = if plan.promote {
            array.insert_axis(ndarray::Axis(2))
        } else {
            array
        };
        let volume = array
            .permuted_axes(&plan.permutation[..])
            .into_dimensionality::<Ix3>()
            .map_err(|_| CoreError::UnsupportedShape { shape: original_shape.clone() })?;

        info!(
            "Loaded volume {:?} as {:?} ({:?})",
            original_shape, plan.canonical, plan.mode
        );

        self.bounds = Some(Bounds::from_shape(plan.canonical));
        self.mode = plan.mode;
        self.volume = Some(volume);
        Ok(plan.mode)
    }

    pub fn volume(&self) -> Option<&Volume> {
        self.volume.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.volume.is_none()
    }

    /// Canonical shape, or `[0, 0, 0]` when nothing is loaded
    pub fn shape(&self) -> [usize; 3] {
        match &self.volume {
            Some(volume) => {
                let (nx, ny, nz) = volume.dim();
                [nx, ny, nz]
            }
            None => [0, 0, 0],
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }
}
