//! Line-cut plot along one axis

use egui::{Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints};
use tracing::debug;

use it_core::{MarkerCallback, MarkerId, SliceKind, ViewPort};

use crate::handle::CrossSectionPanel;
use crate::marker::{MarkerDrag, MarkerLine};

const LINE_COLOR: Color32 = Color32::from_rgb(100, 150, 250);

/// Values along one axis through the cursor, with that axis's marker
pub struct LineView {
    kind: SliceKind,
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Index on the vertical axis, value on the horizontal
    transposed: bool,
    marker: [MarkerLine; 1],
    drag: MarkerDrag,
    callback: Option<MarkerCallback>,
    visible: bool,
    reset_pending: bool,
}

impl LineView {
    pub fn new(kind: SliceKind) -> Self {
        debug_assert!(!kind.is_planar());
        let id = match kind {
            SliceKind::YLine => MarkerId::YLine,
            SliceKind::ZLine => MarkerId::ZLine,
            _ => MarkerId::XLine,
        };

        Self {
            kind,
            xs: Vec::new(),
            ys: Vec::new(),
            transposed: kind == SliceKind::YLine,
            marker: [MarkerLine::new(id)],
            drag: MarkerDrag::default(),
            callback: None,
            visible: true,
            reset_pending: false,
        }
    }

    pub fn marker(&self) -> &MarkerLine {
        &self.marker[0]
    }

    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Points in plot coordinates
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| if self.transposed { [y, x] } else { [x, y] })
            .collect()
    }

    fn axis_name(&self) -> &'static str {
        match self.kind {
            SliceKind::YLine => "y",
            SliceKind::ZLine => "z",
            _ => "x",
        }
    }
}

impl ViewPort for LineView {
    fn set_line_data(&mut self, xs: &[f64], ys: &[f64]) {
        if xs.len() != ys.len() {
            debug!("{}: {} xs for {} ys", self.kind.title(), xs.len(), ys.len());
        }
        self.xs = xs.to_vec();
        self.ys = ys.to_vec();
    }

    fn auto_range(&mut self) {
        self.reset_pending = true;
    }

    fn set_marker_value(&mut self, marker: MarkerId, value: f64) {
        if marker == self.marker[0].id {
            self.marker[0].value = value;
        }
    }

    fn set_marker_bounds(&mut self, marker: MarkerId, min: f64, max: f64) {
        if marker == self.marker[0].id {
            self.marker[0].min = min;
            self.marker[0].max = max;
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn on_marker_moved(&mut self, callback: MarkerCallback) {
        self.callback = Some(callback);
    }
}

impl CrossSectionPanel for LineView {
    fn kind(&self) -> SliceKind {
        self.kind
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn ui(&mut self, ui: &mut Ui) {
        ui.label(RichText::new(self.kind.title()).strong());

        let (x_label, y_label) = if self.transposed {
            ("value", self.axis_name())
        } else {
            (self.axis_name(), "value")
        };
        let mut plot = Plot::new(self.kind.title())
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .allow_drag(false)
            .allow_boxed_zoom(true);
        if self.reset_pending {
            plot = plot.reset();
            self.reset_pending = false;
        }

        let points = self.points();
        let active = self.drag.active();
        let marker = &mut self.marker;
        let drag = &mut self.drag;

        let response = plot.show(ui, |plot_ui| {
            if !points.is_empty() {
                plot_ui.line(Line::new(PlotPoints::new(points)).color(LINE_COLOR).width(1.5));
            }
            marker[0].draw(plot_ui, active.is_some());
            drag.update(plot_ui, marker)
        });

        if let (Some((id, value)), Some(callback)) = (response.inner, self.callback.as_mut()) {
            callback(id, value);
        }
    }
}
