use ndarray::ArrayView2;

/// Color-lookup bounds for a planar image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorLevels {
    pub min: f64,
    pub max: f64,
}

impl ColorLevels {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Min/max over the finite samples of a plane. `None` if there are none.
    pub fn from_plane(plane: ArrayView2<'_, f64>) -> Option<Self> {
        plane
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self::new(v, v)),
                Some(levels) => Some(Self::new(levels.min.min(v), levels.max.max(v))),
            })
    }

    /// Map a sample into `[0, 1]`; a flat range maps everything to 0.5
    pub fn normalize(&self, value: f64) -> f32 {
        let span = self.max - self.min;
        if !value.is_finite() {
            return 0.0;
        }
        if span <= f64::EPSILON {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0) as f32
    }
}
