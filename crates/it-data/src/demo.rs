//! Synthetic volume shown before anything is loaded

use ndarray::{Array1, Array3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of the volume shown at startup
pub const DEMO_SHAPE: [usize; 3] = [51, 101, 201];

/// Offset paraboloid with a little uniform noise.
///
/// Sample (i, j, k) is `(x-0.5)^2 + (y+0.5)^2 + z^2 + 0.1*noise` where x, y, z
/// are spaced evenly on [-1, 1] along each axis.
pub fn synthetic_volume(shape: [usize; 3], seed: u64) -> Array3<f64> {
    let [nx, ny, nz] = shape;
    let xs = linspace(nx);
    let ys = linspace(ny);
    let zs = linspace(nz);
    let mut rng = StdRng::seed_from_u64(seed);

    Array3::from_shape_fn((nx, ny, nz), |(i, j, k)| {
        let noise: f64 = rng.gen();
        (xs[i] - 0.5).powi(2) + (ys[j] + 0.5).powi(2) + zs[k].powi(2) + 0.1 * noise
    })
}

// a single sample sits at -1
fn linspace(n: usize) -> Array1<f64> {
    if n == 1 {
        return Array1::from_elem(1, -1.0);
    }
    Array1::linspace(-1.0, 1.0, n)
}
