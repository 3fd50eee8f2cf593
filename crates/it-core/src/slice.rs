//! Derivation of the six cross-sections
//!
//! Each view depends on a fixed set of cursor axes. After a cursor move
//! only the views whose dependencies intersect the changed axes are
//! recomputed:
//!
//! | changed | recomputed                     |
//! |---------|--------------------------------|
//! | pz      | xy-plane, x-line, y-line       |
//! | py      | xz-plane, x-line, z-line       |
//! | px      | yz-plane, y-line, z-line       |

use ndarray::{s, Array1, Array2};
use serde::{Serialize, Deserialize};

use crate::axis::{Axis, AxisSet};
use crate::cursor::Position;
use crate::error::{CoreError, CoreResult};
use crate::volume::{DisplayMode, Volume};

/// Identifies one of the six derived views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliceKind {
    XyPlane,
    XzPlane,
    YzPlane,
    XLine,
    YLine,
    ZLine,
}

impl SliceKind {
    pub const ALL: [SliceKind; 6] = [
        SliceKind::XyPlane,
        SliceKind::XzPlane,
        SliceKind::YzPlane,
        SliceKind::XLine,
        SliceKind::YLine,
        SliceKind::ZLine,
    ];

    /// Stable index into per-view arrays
    pub fn index(self) -> usize {
        match self {
            SliceKind::XyPlane => 0,
            SliceKind::XzPlane => 1,
            SliceKind::YzPlane => 2,
            SliceKind::XLine => 3,
            SliceKind::YLine => 4,
            SliceKind::ZLine => 5,
        }
    }

    /// Cursor axes whose value selects this view's data
    pub fn dependencies(self) -> AxisSet {
        match self {
            SliceKind::XyPlane => Axis::Z.into(),
            SliceKind::XzPlane => Axis::Y.into(),
            SliceKind::YzPlane => Axis::X.into(),
            SliceKind::XLine => AxisSet::from(Axis::Y).with(Axis::Z),
            SliceKind::YLine => AxisSet::from(Axis::X).with(Axis::Z),
            SliceKind::ZLine => AxisSet::from(Axis::X).with(Axis::Y),
        }
    }

    pub fn is_planar(self) -> bool {
        matches!(self, SliceKind::XyPlane | SliceKind::XzPlane | SliceKind::YzPlane)
    }

    /// Whether the view is shown in the given mode; the planes through the
    /// collapsed axis and the line along it are hidden in 2D
    pub fn visible_in(self, mode: DisplayMode) -> bool {
        match mode {
            DisplayMode::ThreeD => true,
            DisplayMode::TwoD => matches!(
                self,
                SliceKind::XyPlane | SliceKind::XLine | SliceKind::YLine
            ),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SliceKind::XyPlane => "xy",
            SliceKind::XzPlane => "xz",
            SliceKind::YzPlane => "yz",
            SliceKind::XLine => "x",
            SliceKind::YLine => "y",
            SliceKind::ZLine => "z",
        }
    }
}

/// Views produced by one recompute; `None` means "not recomputed"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliceSet {
    pub xy: Option<Array2<f64>>,
    pub xz: Option<Array2<f64>>,
    pub yz: Option<Array2<f64>>,
    pub x_line: Option<Array1<f64>>,
    pub y_line: Option<Array1<f64>>,
    pub z_line: Option<Array1<f64>>,
}

impl SliceSet {
    pub fn planar(&self, kind: SliceKind) -> Option<&Array2<f64>> {
        match kind {
            SliceKind::XyPlane => self.xy.as_ref(),
            SliceKind::XzPlane => self.xz.as_ref(),
            SliceKind::YzPlane => self.yz.as_ref(),
            _ => None,
        }
    }

    pub fn line(&self, kind: SliceKind) -> Option<&Array1<f64>> {
        match kind {
            SliceKind::XLine => self.x_line.as_ref(),
            SliceKind::YLine => self.y_line.as_ref(),
            SliceKind::ZLine => self.z_line.as_ref(),
            _ => None,
        }
    }

    /// Kinds present in this set, in `SliceKind::ALL` order
    pub fn kinds(&self) -> Vec<SliceKind> {
        SliceKind::ALL
            .into_iter()
            .filter(|kind| self.planar(*kind).is_some() || self.line(*kind).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds().is_empty()
    }
}

/// Stateless slicer over a volume and committed position
pub struct SliceEngine;

impl SliceEngine {
    /// Views that must be recomputed for a change
    pub fn affected(changed: AxisSet, force: bool) -> Vec<SliceKind> {
        SliceKind::ALL
            .into_iter()
            .filter(|kind| force || kind.dependencies().intersects(changed))
            .collect()
    }

    /// Recompute the views that depend on `changed` (all of them when `force`)
    pub fn recompute(
        volume: &Volume,
        position: Position,
        changed: AxisSet,
        force: bool,
    ) -> CoreResult<SliceSet> {
        Self::check_position(volume, position)?;

        let mut set = SliceSet::default();
        for kind in Self::affected(changed, force) {
            match kind {
                SliceKind::XyPlane => set.xy = Some(Self::planar(volume, kind, position)),
                SliceKind::XzPlane => set.xz = Some(Self::planar(volume, kind, position)),
                SliceKind::YzPlane => set.yz = Some(Self::planar(volume, kind, position)),
                SliceKind::XLine => set.x_line = Some(Self::line(volume, kind, position)),
                SliceKind::YLine => set.y_line = Some(Self::line(volume, kind, position)),
                SliceKind::ZLine => set.z_line = Some(Self::line(volume, kind, position)),
            }
        }
        Ok(set)
    }

    fn check_position(volume: &Volume, position: Position) -> CoreResult<()> {
        for axis in Axis::ALL {
            let len = volume.len_of(axis.as_array_axis());
            let index = position[axis.index()];
            if index >= len {
                return Err(CoreError::IndexOutOfRange { axis, index, len });
            }
        }
        Ok(())
    }

    /// The plane through the cursor normal to the kind's fixed axis.
    /// Position must already be in range.
    fn planar(volume: &Volume, kind: SliceKind, [px, py, pz]: Position) -> Array2<f64> {
        let (axis, index) = match kind {
            SliceKind::XyPlane => (Axis::Z, pz),
            SliceKind::XzPlane => (Axis::Y, py),
            _ => (Axis::X, px),
        };
        volume.index_axis(axis.as_array_axis(), index).to_owned()
    }

    fn line(volume: &Volume, kind: SliceKind, [px, py, pz]: Position) -> Array1<f64> {
        match kind {
            SliceKind::XLine => volume.slice(s![.., py, pz]).to_owned(),
            SliceKind::YLine => volume.slice(s![px, .., pz]).to_owned(),
            _ => volume.slice(s![px, py, ..]).to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn volume() -> Volume {
        Array3::from_shape_fn((3, 4, 5), |(i, j, k)| (100 * i + 10 * j + k) as f64)
    }

    #[test]
    fn test_update_rule_per_axis() {
        use SliceKind::*;
        assert_eq!(SliceEngine::affected(Axis::Z.into(), false), vec![XyPlane, XLine, YLine]);
        assert_eq!(SliceEngine::affected(Axis::Y.into(), false), vec![XzPlane, XLine, ZLine]);
        assert_eq!(SliceEngine::affected(Axis::X.into(), false), vec![YzPlane, YLine, ZLine]);
        assert!(SliceEngine::affected(AxisSet::EMPTY, false).is_empty());
        assert_eq!(SliceEngine::affected(AxisSet::EMPTY, true).len(), 6);
    }

    #[test]
    fn test_forced_recompute_matches_indexing() {
        let volume = volume();
        let [px, py, pz] = [2, 1, 3];
        let set = SliceEngine::recompute(&volume, [px, py, pz], AxisSet::EMPTY, true).unwrap();

        let xy = set.xy.unwrap();
        let xz = set.xz.unwrap();
        let yz = set.yz.unwrap();
        assert_eq!(xy.dim(), (3, 4));
        assert_eq!(xz.dim(), (3, 5));
        assert_eq!(yz.dim(), (4, 5));
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(xy[[i, j]], volume[[i, j, pz]]);
            }
            for k in 0..5 {
                assert_eq!(xz[[i, k]], volume[[i, py, k]]);
            }
        }
        for j in 0..4 {
            for k in 0..5 {
                assert_eq!(yz[[j, k]], volume[[px, j, k]]);
            }
        }

        assert_eq!(set.x_line.unwrap().to_vec(), vec![13.0, 113.0, 213.0]);
        assert_eq!(set.y_line.unwrap().to_vec(), vec![203.0, 213.0, 223.0, 233.0]);
        assert_eq!(
            set.z_line.unwrap().to_vec(),
            vec![210.0, 211.0, 212.0, 213.0, 214.0]
        );
    }

    #[test]
    fn test_partial_recompute_only_fills_dependents() {
        let set = SliceEngine::recompute(&volume(), [0, 2, 0], Axis::Y.into(), false).unwrap();
        assert_eq!(
            set.kinds(),
            vec![SliceKind::XzPlane, SliceKind::XLine, SliceKind::ZLine]
        );
        assert!(set.xy.is_none());
    }

    #[test]
    fn test_out_of_range_position_is_rejected() {
        let err = SliceEngine::recompute(&volume(), [0, 4, 0], AxisSet::ALL, false).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { axis: Axis::Y, index: 4, len: 4 });
    }

    #[test]
    fn test_two_d_visibility() {
        let visible: Vec<_> = SliceKind::ALL
            .into_iter()
            .filter(|kind| kind.visible_in(DisplayMode::TwoD))
            .collect();
        assert_eq!(visible, vec![SliceKind::XyPlane, SliceKind::XLine, SliceKind::YLine]);
        assert!(SliceKind::ALL.iter().all(|kind| kind.visible_in(DisplayMode::ThreeD)));
    }
}
