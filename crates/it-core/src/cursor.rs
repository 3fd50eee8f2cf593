//! The shared 3D cursor
//!
//! Keeps a committed position (what the slices currently show) and a
//! pending position (what the latest interaction asked for). Proposals are
//! clamped into the current bounds before they are stored.

use crate::axis::Axis;
use crate::volume::Bounds;

/// Integer cursor position `[px, py, pz]`
pub type Position = [usize; 3];

/// Committed/pending cursor double buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorState {
    committed: Position,
    pending: Position,
    bounds: Option<Bounds>,
}

impl CursorState {
    /// Create a cursor at the origin with no bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Resynchronize the clamping range; must happen before any proposal
    /// against a newly loaded volume
    pub fn set_bounds(&mut self, bounds: Option<Bounds>) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Round `raw` to the nearest index and clamp it into the axis bounds.
    ///
    /// Returns `None` when no volume bounds are known. A NaN proposal keeps
    /// the committed value.
    pub fn clamp(&self, axis: Axis, raw: f64) -> Option<usize> {
        let bounds = self.bounds?;
        if raw.is_nan() {
            return Some(self.committed[axis.index()]);
        }
        let max = bounds.max(axis);
        Some(raw.round().clamp(0.0, max as f64) as usize)
    }

    /// Store the clamped proposal as pending for `axis`.
    ///
    /// Returns whether it differs from the committed value, i.e. whether
    /// dependent slices need recomputing.
    pub fn propose(&mut self, axis: Axis, raw: f64) -> bool {
        let Some(value) = self.clamp(axis, raw) else {
            return false;
        };
        self.pending[axis.index()] = value;
        value != self.committed[axis.index()]
    }

    /// Copy the pending value of `axis` into the committed position
    pub fn commit(&mut self, axis: Axis) {
        self.committed[axis.index()] = self.pending[axis.index()];
    }

    /// Move both buffers back to the origin
    pub fn reset(&mut self) {
        self.committed = [0, 0, 0];
        self.pending = [0, 0, 0];
    }

    pub fn committed(&self) -> Position {
        self.committed
    }

    pub fn pending(&self) -> Position {
        self.pending
    }

    /// Committed value along one axis
    pub fn get(&self, axis: Axis) -> usize {
        self.committed[axis.index()]
    }

    pub fn is_reconciled(&self) -> bool {
        self.committed == self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(shape: [usize; 3]) -> CursorState {
        let mut cursor = CursorState::new();
        cursor.set_bounds(Some(Bounds::from_shape(shape)));
        cursor
    }

    #[test]
    fn test_propose_rounds_and_clamps() {
        let mut cursor = cursor([51, 101, 201]);

        assert!(cursor.propose(Axis::Y, 3.6));
        assert_eq!(cursor.pending()[1], 4);
        assert_eq!(cursor.committed()[1], 0);

        assert!(cursor.propose(Axis::Y, 200.0));
        assert_eq!(cursor.pending()[1], 100);

        assert!(!cursor.propose(Axis::Z, -12.0));
        assert_eq!(cursor.pending()[2], 0);
    }

    #[test]
    fn test_commit_reconciles_axis() {
        let mut cursor = cursor([4, 4, 4]);
        cursor.propose(Axis::X, 2.2);
        assert!(!cursor.is_reconciled());
        cursor.commit(Axis::X);
        assert!(cursor.is_reconciled());
        assert_eq!(cursor.get(Axis::X), 2);
    }

    #[test]
    fn test_unchanged_proposal_reports_false() {
        let mut cursor = cursor([4, 4, 4]);
        cursor.propose(Axis::Z, 3.0);
        cursor.commit(Axis::Z);
        assert!(!cursor.propose(Axis::Z, 2.7));
        assert!(!cursor.propose(Axis::Z, 9.0));
    }

    #[test]
    fn test_clamping_is_a_fixed_point() {
        let mut cursor = cursor([5, 9, 3]);
        for axis in Axis::ALL {
            for raw in [-3.0, -0.4, 0.5, 1.49, 2.5, 7.8, 100.0, f64::INFINITY] {
                cursor.propose(axis, raw);
                cursor.commit(axis);
                let once = cursor.get(axis);
                assert!(!cursor.propose(axis, once as f64));
                cursor.commit(axis);
                assert_eq!(cursor.get(axis), once);
            }
        }
    }

    #[test]
    fn test_no_bounds_rejects_proposals() {
        let mut cursor = CursorState::new();
        assert!(!cursor.propose(Axis::X, 4.0));
        assert_eq!(cursor.pending(), [0, 0, 0]);
    }

    #[test]
    fn test_nan_keeps_committed_value() {
        let mut cursor = cursor([8, 8, 8]);
        cursor.propose(Axis::X, 5.0);
        cursor.commit(Axis::X);
        assert!(!cursor.propose(Axis::X, f64::NAN));
        assert_eq!(cursor.get(Axis::X), 5);
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut cursor = cursor([8, 8, 8]);
        cursor.propose(Axis::Y, 6.0);
        cursor.commit(Axis::Y);
        cursor.propose(Axis::Z, 6.0);
        cursor.reset();
        assert_eq!(cursor.committed(), [0, 0, 0]);
        assert_eq!(cursor.pending(), [0, 0, 0]);
    }
}
