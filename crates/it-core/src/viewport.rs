//! Rendering capability consumed by the controller
//!
//! The controller never draws. It pushes slices, marker values and bounds
//! into six [`ViewPort`]s, one per [`SliceKind`], and learns about drags
//! only through the callback registered with `on_marker_moved`.

use ndarray::ArrayView2;
use serde::{Serialize, Deserialize};

use crate::axis::Axis;
use crate::levels::ColorLevels;
use crate::slice::SliceKind;

/// Callback invoked by a view when the user drags one of its markers
pub type MarkerCallback = Box<dyn FnMut(MarkerId, f64) + Send + Sync>;

/// A draggable line bound to one cursor axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerId {
    /// Vertical line on the xy-plane
    XyX,
    /// Horizontal line on the xy-plane
    XyY,
    /// Horizontal line on the xz-plane
    XzZ,
    XLine,
    YLine,
    ZLine,
}

/// Direction a marker line is drawn in its host view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerOrientation {
    Vertical,
    Horizontal,
}

impl MarkerId {
    pub const ALL: [MarkerId; 6] = [
        MarkerId::XyX,
        MarkerId::XyY,
        MarkerId::XzZ,
        MarkerId::XLine,
        MarkerId::YLine,
        MarkerId::ZLine,
    ];

    pub fn index(self) -> usize {
        match self {
            MarkerId::XyX => 0,
            MarkerId::XyY => 1,
            MarkerId::XzZ => 2,
            MarkerId::XLine => 3,
            MarkerId::YLine => 4,
            MarkerId::ZLine => 5,
        }
    }

    /// Cursor axis this marker controls
    pub fn axis(self) -> Axis {
        match self {
            MarkerId::XyX | MarkerId::XLine => Axis::X,
            MarkerId::XyY | MarkerId::YLine => Axis::Y,
            MarkerId::XzZ | MarkerId::ZLine => Axis::Z,
        }
    }

    /// The other marker showing the same axis
    pub fn paired(self) -> MarkerId {
        match self {
            MarkerId::XyX => MarkerId::XLine,
            MarkerId::XLine => MarkerId::XyX,
            MarkerId::XyY => MarkerId::YLine,
            MarkerId::YLine => MarkerId::XyY,
            MarkerId::XzZ => MarkerId::ZLine,
            MarkerId::ZLine => MarkerId::XzZ,
        }
    }

    /// Both markers of an axis, planar one first
    pub fn for_axis(axis: Axis) -> [MarkerId; 2] {
        match axis {
            Axis::X => [MarkerId::XyX, MarkerId::XLine],
            Axis::Y => [MarkerId::XyY, MarkerId::YLine],
            Axis::Z => [MarkerId::XzZ, MarkerId::ZLine],
        }
    }

    /// View that draws this marker
    pub fn host(self) -> SliceKind {
        match self {
            MarkerId::XyX | MarkerId::XyY => SliceKind::XyPlane,
            MarkerId::XzZ => SliceKind::XzPlane,
            MarkerId::XLine => SliceKind::XLine,
            MarkerId::YLine => SliceKind::YLine,
            MarkerId::ZLine => SliceKind::ZLine,
        }
    }

    pub fn orientation(self) -> MarkerOrientation {
        match self {
            MarkerId::XyX | MarkerId::XLine | MarkerId::ZLine => MarkerOrientation::Vertical,
            // the y-line is plotted transposed, index running vertically
            MarkerId::XyY | MarkerId::XzZ | MarkerId::YLine => MarkerOrientation::Horizontal,
        }
    }
}

/// Rendering capability for one cross-section view.
///
/// Planar views ignore line data and vice versa, hence the defaults.
pub trait ViewPort: Send {
    /// Replace the displayed plane
    fn set_planar_image(&mut self, _image: ArrayView2<'_, f64>) {}

    /// Replace the displayed line cut
    fn set_line_data(&mut self, _xs: &[f64], _ys: &[f64]) {}

    /// Fit the view range to its content
    fn auto_range(&mut self);

    fn set_color_levels(&mut self, _levels: ColorLevels) {}

    /// Drop pushed levels so the view scales to its own content
    fn clear_color_levels(&mut self) {}

    /// Move a marker without emitting a move event
    fn set_marker_value(&mut self, marker: MarkerId, value: f64);

    fn set_marker_bounds(&mut self, marker: MarkerId, min: f64, max: f64);

    /// Show or hide the whole view
    fn set_visible(&mut self, _visible: bool) {}

    /// Register the callback fired when the user drags a marker
    fn on_marker_moved(&mut self, callback: MarkerCallback);
}

/// The six views, addressed by [`SliceKind`]
pub struct ViewPorts {
    ports: [Box<dyn ViewPort>; 6],
}

impl ViewPorts {
    pub fn new(
        xy: Box<dyn ViewPort>,
        xz: Box<dyn ViewPort>,
        yz: Box<dyn ViewPort>,
        x_line: Box<dyn ViewPort>,
        y_line: Box<dyn ViewPort>,
        z_line: Box<dyn ViewPort>,
    ) -> Self {
        Self {
            ports: [xy, xz, yz, x_line, y_line, z_line],
        }
    }

    pub fn get_mut(&mut self, kind: SliceKind) -> &mut dyn ViewPort {
        self.ports[kind.index()].as_mut()
    }

    /// The view hosting `marker`
    pub fn host_mut(&mut self, marker: MarkerId) -> &mut dyn ViewPort {
        self.get_mut(marker.host())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn ViewPort>> {
        self.ports.iter_mut()
    }
}
