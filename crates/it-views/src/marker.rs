//! Draggable marker lines shared by the planar and line views

use egui::{Color32, Pos2};
use egui_plot::{HLine, PlotPoint, PlotUi, VLine};
use it_core::{MarkerId, MarkerOrientation};

/// Pointer distance in points within which a drag grabs a marker
pub const GRAB_RADIUS: f32 = 6.0;

const MARKER_COLOR: Color32 = Color32::from_rgb(255, 196, 0);

/// One marker line as drawn in a plot
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLine {
    pub id: MarkerId,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl MarkerLine {
    pub fn new(id: MarkerId) -> Self {
        Self {
            id,
            value: 0.0,
            min: 0.0,
            max: 0.0,
        }
    }

    pub fn orientation(&self) -> MarkerOrientation {
        self.id.orientation()
    }

    /// Keep the drawn line inside the draggable range
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.value;
        }
        value.clamp(self.min, self.max.max(self.min))
    }

    /// Clamped and rounded to the nearest index
    pub fn snap(&self, value: f64) -> f64 {
        self.clamp(value).round()
    }

    /// The pointer coordinate along the axis this marker moves on
    pub fn coordinate(&self, pointer: PlotPoint) -> f64 {
        match self.orientation() {
            MarkerOrientation::Vertical => pointer.x,
            MarkerOrientation::Horizontal => pointer.y,
        }
    }

    pub fn draw(&self, plot_ui: &mut PlotUi, active: bool) {
        let width = if active { 2.5 } else { 1.5 };
        match self.orientation() {
            MarkerOrientation::Vertical => {
                plot_ui.vline(VLine::new(self.value).color(MARKER_COLOR).width(width))
            }
            MarkerOrientation::Horizontal => {
                plot_ui.hline(HLine::new(self.value).color(MARKER_COLOR).width(width))
            }
        }
    }

    fn screen_distance(&self, plot_ui: &PlotUi, pointer: PlotPoint, screen: Pos2) -> f32 {
        let on_line = match self.orientation() {
            MarkerOrientation::Vertical => PlotPoint::new(self.value, pointer.y),
            MarkerOrientation::Horizontal => PlotPoint::new(pointer.x, self.value),
        };
        plot_ui.screen_from_plot(on_line).distance(screen)
    }
}

/// The closest marker within [`GRAB_RADIUS`]
pub fn pick(markers: &[MarkerLine], mut distance: impl FnMut(&MarkerLine) -> f32) -> Option<MarkerId> {
    markers
        .iter()
        .map(|marker| (marker.id, distance(marker)))
        .filter(|(_, d)| *d <= GRAB_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Tracks which marker, if any, the current drag holds
#[derive(Debug, Default)]
pub struct MarkerDrag {
    active: Option<MarkerId>,
}

impl MarkerDrag {
    pub fn active(&self) -> Option<MarkerId> {
        self.active
    }

    /// Run inside a plot closure. Returns the raw pointer value for the
    /// dragged marker; the line itself is moved locally for feedback,
    /// snapped to whole indices like the committed cursor.
    pub fn update(&mut self, plot_ui: &PlotUi, markers: &mut [MarkerLine]) -> Option<(MarkerId, f64)> {
        let response = plot_ui.response();
        let pointer = plot_ui.pointer_coordinate();

        if response.drag_started() {
            if let (Some(pointer), Some(screen)) = (pointer, response.interact_pointer_pos()) {
                self.active = pick(markers, |m| m.screen_distance(plot_ui, pointer, screen));
            }
        }

        let moved = match (self.active, pointer) {
            (Some(id), Some(pointer)) if response.dragged() => {
                markers.iter_mut().find(|m| m.id == id).map(|line| {
                    let raw = line.coordinate(pointer);
                    line.value = line.snap(raw);
                    (id, raw)
                })
            }
            _ => None,
        };

        if response.drag_released() {
            self.active = None;
        }
        moved
    }
}
