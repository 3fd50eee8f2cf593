//! Display-mode policy for incoming arrays
//!
//! Decides whether an array is shown as a full volume or collapsed to a
//! single plane, and which axis permutation puts it in canonical form.
//! A singleton axis always ends up as the third logical axis.

use serde::{Serialize, Deserialize};

use crate::error::{CoreError, CoreResult};

/// How the cross-sections are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Every axis has more than one sample
    ThreeD,
    /// At least one axis is a singleton; only the xy-plane and its line cuts are meaningful
    TwoD,
}

/// Result of classifying an incoming shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapePlan {
    pub mode: DisplayMode,
    /// Whether a trailing unit axis must be appended (rank-2 input)
    pub promote: bool,
    /// Axis order applied after promotion, in `permuted_axes` convention
    pub permutation: [usize; 3],
    /// Shape of the array once promoted and permuted
    pub canonical: [usize; 3],
}

impl ShapePlan {
    pub fn is_identity(&self) -> bool {
        self.permutation == IDENTITY
    }
}

const IDENTITY: [usize; 3] = [0, 1, 2];
/// (1, ny, nz) -> (ny, nz, 1)
const COLLAPSE_X: [usize; 3] = [1, 2, 0];
/// (nx, 1, nz) -> (nx, nz, 1)
const COLLAPSE_Y: [usize; 3] = [0, 2, 1];

/// Classify a shape.
///
/// Rank 2 is promoted to `(nx, ny, 1)`. For rank 3 the lowest-indexed
/// singleton axis is moved last, so `(1, 1, 7)` becomes `(1, 7, 1)`.
/// Any other rank, or an axis of length zero, is rejected.
pub fn plan(shape: &[usize]) -> CoreResult<ShapePlan> {
    if shape.contains(&0) {
        return Err(CoreError::UnsupportedShape { shape: shape.to_vec() });
    }

    match *shape {
        [nx, ny] => Ok(ShapePlan {
            mode: DisplayMode::TwoD,
            promote: true,
            permutation: IDENTITY,
            canonical: [nx, ny, 1],
        }),
        [nx, ny, nz] => {
            let (mode, permutation) = if nx == 1 {
                (DisplayMode::TwoD, COLLAPSE_X)
            } else if ny == 1 {
                (DisplayMode::TwoD, COLLAPSE_Y)
            } else if nz == 1 {
                (DisplayMode::TwoD, IDENTITY)
            } else {
                (DisplayMode::ThreeD, IDENTITY)
            };
            let source = [nx, ny, nz];
            Ok(ShapePlan {
                mode,
                promote: false,
                permutation,
                canonical: permutation.map(|axis| source[axis]),
            })
        }
        _ => Err(CoreError::UnsupportedShape { shape: shape.to_vec() }),
    }
}
