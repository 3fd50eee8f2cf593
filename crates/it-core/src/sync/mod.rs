//! Cursor synchronization across the six views
//!
//! Every marker move goes through [`SyncController::on_marker_moved`]. The
//! controller clamps the value, commits it, pushes it to both markers of
//! the axis as plain data (never as a new event) and recomputes only the
//! slices that depend on that axis.

use ndarray::ArrayD;
use tracing::{debug, error, info, warn};

use crate::axis::{Axis, AxisSet};
use crate::cursor::{CursorState, Position};
use crate::error::CoreResult;
use crate::levels::ColorLevels;
use crate::slice::{SliceEngine, SliceKind, SliceSet};
use crate::viewport::{MarkerId, ViewPorts};
use crate::volume::{DisplayMode, Volume, VolumeStore};

/// Reconciliation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No interaction in flight
    Idle,
    /// A committed value is being propagated to the views
    Reconciling,
}

/// Arrow-key nudges of the xy-plane cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

impl Nudge {
    /// Marker moved by this nudge and the signed direction
    fn target(self) -> (MarkerId, f64) {
        match self {
            Nudge::Up => (MarkerId::XyY, 1.0),
            Nudge::Down => (MarkerId::XyY, -1.0),
            Nudge::Left => (MarkerId::XyX, -1.0),
            Nudge::Right => (MarkerId::XyX, 1.0),
        }
    }
}

/// Textual position and shape readouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReadout {
    pub position: Position,
    pub shape: [usize; 3],
}

impl StatusReadout {
    pub fn position_label(&self) -> String {
        let [px, py, pz] = self.position;
        format!("Pos = [{}, {}, {}]", px, py, pz)
    }

    pub fn shape_label(&self) -> String {
        let [nx, ny, nz] = self.shape;
        format!("[Nx, Ny, Nz] = [{}, {}, {}]", nx, ny, nz)
    }
}

/// Orchestrates volume, cursor, slicing and views
pub struct SyncController {
    store: VolumeStore,
    cursor: CursorState,
    views: ViewPorts,
    /// Last value pushed to each marker
    markers: [f64; 6],
    state: SyncState,
    levels: Option<ColorLevels>,
    last_recomputed: Vec<SliceKind>,
}

impl SyncController {
    /// Create a controller with an empty volume
    pub fn new(views: ViewPorts) -> Self {
        Self {
            store: VolumeStore::new(),
            cursor: CursorState::new(),
            views,
            markers: [0.0; 6],
            state: SyncState::Idle,
            levels: None,
            last_recomputed: Vec::new(),
        }
    }

    /// Replace the volume.
    ///
    /// On success the marker bounds are resynchronized, the cursor returns
    /// to the origin, every slice is recomputed and the views autoscaled.
    /// On failure nothing observable changes.
    pub fn load_volume(&mut self, array: ArrayD<f64>) -> CoreResult<DisplayMode> {
        let mode = self.store.replace(array)?;
        let bounds = self.store.bounds();

        self.state = SyncState::Reconciling;
        self.cursor.set_bounds(bounds);
        self.cursor.reset();

        if let Some(bounds) = bounds {
            for marker in MarkerId::ALL {
                let max = bounds.max(marker.axis()) as f64;
                self.views.host_mut(marker).set_marker_bounds(marker, 0.0, max);
            }
        }
        for marker in MarkerId::ALL {
            self.push_marker(marker, 0.0);
        }
        for kind in SliceKind::ALL {
            self.views.get_mut(kind).set_visible(kind.visible_in(mode));
        }

        self.refresh(AxisSet::ALL, true);
        self.state = SyncState::Idle;

        info!("Volume replaced: shape {:?}, {:?} mode", self.store.shape(), mode);
        self.autoscale_all();
        Ok(mode)
    }

    /// Handle a drag of `marker` to `raw`. Returns whether the cursor moved.
    pub fn on_marker_moved(&mut self, marker: MarkerId, raw: f64) -> bool {
        if self.state != SyncState::Idle {
            warn!("Dropping {:?} move while reconciling", marker);
            return false;
        }

        let axis = marker.axis();
        if !self.cursor.propose(axis, raw) {
            // the source view may have drawn a fractional value; snap it back
            if self.store.volume().is_some() {
                self.push_marker(marker, self.cursor.get(axis) as f64);
            }
            return false;
        }

        self.state = SyncState::Reconciling;
        self.cursor.commit(axis);
        let value = self.cursor.get(axis) as f64;
        debug!("Marker {:?} moved {} to {}", marker, axis, value);

        // data pushes only; the source marker is snapped to the committed index too
        self.push_marker(marker, value);
        self.push_marker(marker.paired(), value);

        self.refresh(axis.into(), false);
        self.state = SyncState::Idle;
        true
    }

    /// Move the xy-plane cursor by `step` cells in a direction
    pub fn nudge(&mut self, nudge: Nudge, step: usize) -> bool {
        let (marker, sign) = nudge.target();
        let current = self.cursor.get(marker.axis()) as f64;
        self.on_marker_moved(marker, current + sign * step as f64)
    }

    /// Fit every view to its content and recompute the color levels from
    /// the xy-plane at the committed z. A plane without finite samples
    /// leaves no levels pinned.
    pub fn autoscale_all(&mut self) -> Option<ColorLevels> {
        for view in self.views.iter_mut() {
            view.auto_range();
        }

        let pz = self.cursor.get(Axis::Z);
        self.levels = self
            .store
            .volume()
            .and_then(|volume| ColorLevels::from_plane(volume.index_axis(Axis::Z.as_array_axis(), pz)));

        let xy = self.views.get_mut(SliceKind::XyPlane);
        match self.levels {
            Some(levels) => {
                debug!("Color levels {:?}", levels);
                xy.set_color_levels(levels);
            }
            None => {
                debug!("No finite samples in the xy-plane, color levels cleared");
                xy.clear_color_levels();
            }
        }
        self.levels
    }

    fn push_marker(&mut self, marker: MarkerId, value: f64) {
        self.markers[marker.index()] = value;
        self.views.host_mut(marker).set_marker_value(marker, value);
    }

    fn refresh(&mut self, changed: AxisSet, force: bool) {
        let Some(volume) = self.store.volume() else {
            return;
        };

        match SliceEngine::recompute(volume, self.cursor.committed(), changed, force) {
            Ok(set) => {
                self.last_recomputed = set.kinds();
                debug!("Recomputed {:?}", self.last_recomputed);
                self.push_slices(set);
            }
            Err(err) => {
                debug_assert!(false, "cursor escaped bounds: {}", err);
                error!("Skipping slice update: {}", err);
            }
        }
    }

    fn push_slices(&mut self, set: SliceSet) {
        for kind in SliceKind::ALL {
            if let Some(plane) = set.planar(kind) {
                self.views.get_mut(kind).set_planar_image(plane.view());
            }
            if let Some(line) = set.line(kind) {
                let xs: Vec<f64> = (0..line.len()).map(|i| i as f64).collect();
                let ys: Vec<f64> = line.iter().copied().collect();
                self.views.get_mut(kind).set_line_data(&xs, &ys);
            }
        }
    }

    pub fn position(&self) -> Position {
        self.cursor.committed()
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn shape(&self) -> [usize; 3] {
        self.store.shape()
    }

    pub fn volume(&self) -> Option<&Volume> {
        self.store.volume()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.store.display_mode()
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn levels(&self) -> Option<ColorLevels> {
        self.levels
    }

    /// Value last pushed to a marker
    pub fn marker_value(&self, marker: MarkerId) -> f64 {
        self.markers[marker.index()]
    }

    /// Views updated by the most recent recompute
    pub fn last_recomputed(&self) -> &[SliceKind] {
        &self.last_recomputed
    }

    pub fn status(&self) -> StatusReadout {
        StatusReadout {
            position: self.position(),
            shape: self.shape(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{recording_views, Recorder};
    use ndarray::{s, Array3, ArrayD, IxDyn};

    /// Deterministic stand-in for the synthetic startup volume
    fn default_volume() -> ArrayD<f64> {
        Array3::from_shape_fn((51, 101, 201), |(i, j, k)| {
            (i * 1_000_000 + j * 1_000 + k) as f64
        })
        .into_dyn()
    }

    fn loaded() -> (SyncController, Vec<Recorder>) {
        let (views, recorders) = recording_views();
        let mut controller = SyncController::new(views);
        controller.load_volume(default_volume()).unwrap();
        (controller, recorders)
    }

    #[test]
    fn test_load_resets_and_pushes_everything() {
        let (controller, recorders) = loaded();
        assert_eq!(controller.position(), [0, 0, 0]);
        assert_eq!(controller.shape(), [51, 101, 201]);
        assert_eq!(controller.display_mode(), DisplayMode::ThreeD);
        assert_eq!(controller.last_recomputed().len(), 6);

        let xy = recorders[SliceKind::XyPlane.index()].snapshot();
        assert_eq!(xy.images, 1);
        assert_eq!(xy.bounds[&MarkerId::XyX], (0.0, 50.0));
        assert_eq!(xy.bounds[&MarkerId::XyY], (0.0, 100.0));
        assert!(xy.levels.is_some());

        let z = recorders[SliceKind::ZLine.index()].snapshot();
        assert_eq!(z.bounds[&MarkerId::ZLine], (0.0, 200.0));
        assert_eq!(z.lines, 1);
        assert_eq!(z.auto_ranges, 1);
    }

    #[test]
    fn test_y_marker_clamps_and_mirrors() {
        let (mut controller, recorders) = loaded();
        let yz_before = recorders[SliceKind::YzPlane.index()].snapshot().images;

        assert!(controller.on_marker_moved(MarkerId::XyY, 200.0));
        assert_eq!(controller.position(), [0, 100, 0]);
        assert_eq!(controller.marker_value(MarkerId::YLine), 100.0);
        assert_eq!(controller.marker_value(MarkerId::XyY), 100.0);
        assert_eq!(
            controller.last_recomputed(),
            &[SliceKind::XzPlane, SliceKind::XLine, SliceKind::ZLine]
        );

        let y_line = recorders[SliceKind::YLine.index()].snapshot();
        assert_eq!(y_line.markers[&MarkerId::YLine], 100.0);

        // yz-plane depends only on x, so it was not redrawn
        assert_eq!(recorders[SliceKind::YzPlane.index()].snapshot().images, yz_before);

        let xz = recorders[SliceKind::XzPlane.index()].snapshot();
        let volume = controller.volume().unwrap();
        assert_eq!(xz.last_image.unwrap(), volume.slice(s![.., 100, ..]).to_owned());
    }

    #[test]
    fn test_z_marker_clamps_to_last_plane() {
        let (mut controller, recorders) = loaded();
        assert!(controller.on_marker_moved(MarkerId::ZLine, 250.0));
        assert_eq!(controller.position()[2], 200);
        assert_eq!(controller.marker_value(MarkerId::XzZ), 200.0);
        assert_eq!(
            controller.last_recomputed(),
            &[SliceKind::XyPlane, SliceKind::XLine, SliceKind::YLine]
        );

        let x_line = recorders[SliceKind::XLine.index()].snapshot();
        let volume = controller.volume().unwrap();
        let expected: Vec<f64> = volume.slice(s![.., 0, 200]).iter().copied().collect();
        assert_eq!(x_line.last_line.unwrap(), expected);
    }

    #[test]
    fn test_unchanged_move_is_a_no_op() {
        let (mut controller, recorders) = loaded();
        controller.on_marker_moved(MarkerId::XLine, 7.0);
        let images = recorders[SliceKind::YzPlane.index()].snapshot().images;

        assert!(!controller.on_marker_moved(MarkerId::XyX, 7.3));
        assert!(!controller.on_marker_moved(MarkerId::XLine, 6.6));
        assert_eq!(recorders[SliceKind::YzPlane.index()].snapshot().images, images);
        assert_eq!(controller.state(), SyncState::Idle);
        assert!(controller.cursor().is_reconciled());
    }

    #[test]
    fn test_unchanged_move_snaps_source_marker_back() {
        let (mut controller, recorders) = loaded();
        controller.on_marker_moved(MarkerId::XLine, 7.0);

        assert!(!controller.on_marker_moved(MarkerId::XyX, 7.4));
        let xy = recorders[SliceKind::XyPlane.index()].snapshot();
        let x_line = recorders[SliceKind::XLine.index()].snapshot();
        assert_eq!(xy.markers[&MarkerId::XyX], 7.0);
        assert_eq!(x_line.markers[&MarkerId::XLine], 7.0);
    }

    #[test]
    fn test_paired_markers_always_agree() {
        let (mut controller, _recorders) = loaded();
        let moves = [
            (MarkerId::XyX, 12.4),
            (MarkerId::ZLine, -5.0),
            (MarkerId::YLine, 99.5),
            (MarkerId::XzZ, 150.5),
            (MarkerId::XLine, 1000.0),
            (MarkerId::XyY, 3.0),
            (MarkerId::XyX, 0.49),
        ];
        for (marker, value) in moves {
            controller.on_marker_moved(marker, value);
            for axis in Axis::ALL {
                let [a, b] = MarkerId::for_axis(axis);
                assert_eq!(controller.marker_value(a), controller.marker_value(b));
                assert_eq!(controller.marker_value(a), controller.position()[axis.index()] as f64);
            }
            let shape = controller.shape();
            for axis in Axis::ALL {
                assert!(controller.position()[axis.index()] < shape[axis.index()]);
            }
        }
    }

    #[test]
    fn test_nudges_move_xy_cursor() {
        let (mut controller, _recorders) = loaded();
        assert!(controller.nudge(Nudge::Up, 1));
        assert!(controller.nudge(Nudge::Right, 3));
        assert_eq!(controller.position(), [3, 1, 0]);
        assert_eq!(controller.marker_value(MarkerId::YLine), 1.0);
        assert_eq!(controller.marker_value(MarkerId::XLine), 3.0);

        assert!(controller.nudge(Nudge::Left, 5));
        assert_eq!(controller.position()[0], 0);
        assert!(!controller.nudge(Nudge::Left, 1));
        assert!(controller.nudge(Nudge::Down, 1));
        assert!(!controller.nudge(Nudge::Down, 1));
    }

    #[test]
    fn test_failed_load_leaves_state_intact() {
        let (mut controller, recorders) = loaded();
        controller.on_marker_moved(MarkerId::XLine, 10.0);
        controller.on_marker_moved(MarkerId::ZLine, 20.0);
        let status = controller.status();
        let images = recorders[SliceKind::XyPlane.index()].snapshot().images;

        let rank_four = ArrayD::<f64>::zeros(IxDyn(&[2, 2, 2, 2]));
        assert!(controller.load_volume(rank_four).is_err());
        assert_eq!(controller.status(), status);
        assert_eq!(controller.cursor().bounds().unwrap().max(Axis::Z), 200);
        assert_eq!(recorders[SliceKind::XyPlane.index()].snapshot().images, images);
    }

    #[test]
    fn test_two_d_load_hides_dependent_views() {
        let (mut controller, recorders) = loaded();
        controller.on_marker_moved(MarkerId::XLine, 4.0);

        let flat = ArrayD::<f64>::zeros(IxDyn(&[5, 1, 7]));
        assert_eq!(controller.load_volume(flat).unwrap(), DisplayMode::TwoD);
        assert_eq!(controller.shape(), [5, 7, 1]);
        assert_eq!(controller.position(), [0, 0, 0]);

        for kind in SliceKind::ALL {
            let visible = recorders[kind.index()].snapshot().visible;
            assert_eq!(visible, Some(kind.visible_in(DisplayMode::TwoD)));
        }
        assert!(!controller.on_marker_moved(MarkerId::ZLine, 3.0));
    }

    #[test]
    fn test_autoscale_uses_current_xy_plane() {
        let (mut controller, _recorders) = loaded();
        controller.on_marker_moved(MarkerId::ZLine, 7.0);
        let levels = controller.autoscale_all().unwrap();
        assert_eq!(levels, ColorLevels::new(7.0, 50_100_007.0));
    }

    #[test]
    fn test_reload_without_finite_samples_clears_levels() {
        let (mut controller, recorders) = loaded();
        assert!(controller.levels().is_some());

        let nan = ArrayD::from_elem(IxDyn(&[3, 3, 3]), f64::NAN);
        controller.load_volume(nan).unwrap();
        assert_eq!(controller.levels(), None);
        assert_eq!(recorders[SliceKind::XyPlane.index()].snapshot().levels, None);

        let ramp = Array3::from_shape_fn((3, 3, 3), |(i, j, k)| (i + j + k) as f64).into_dyn();
        controller.load_volume(ramp).unwrap();
        assert_eq!(controller.levels(), Some(ColorLevels::new(0.0, 4.0)));
    }

    #[test]
    fn test_empty_controller_ignores_moves() {
        let (views, _recorders) = recording_views();
        let mut controller = SyncController::new(views);
        assert!(!controller.on_marker_moved(MarkerId::XyX, 3.0));
        assert!(controller.autoscale_all().is_none());
        assert_eq!(controller.status().position_label(), "Pos = [0, 0, 0]");
        assert_eq!(controller.status().shape_label(), "[Nx, Ny, Nz] = [0, 0, 0]");
    }
}
