//! Recording view double for controller tests

use std::collections::HashMap;
use std::sync::Arc;
use ndarray::{Array2, ArrayView2};
use parking_lot::Mutex;

use crate::levels::ColorLevels;
use crate::viewport::{MarkerCallback, MarkerId, ViewPort, ViewPorts};

/// Everything a view has been told so far
#[derive(Debug, Clone, Default)]
pub struct Recording {
    pub images: usize,
    pub lines: usize,
    pub auto_ranges: usize,
    pub last_image: Option<Array2<f64>>,
    pub last_line: Option<Vec<f64>>,
    pub levels: Option<ColorLevels>,
    pub markers: HashMap<MarkerId, f64>,
    pub bounds: HashMap<MarkerId, (f64, f64)>,
    pub visible: Option<bool>,
}

/// Shared handle to a view's recording
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Recording>>);

impl Recorder {
    pub fn snapshot(&self) -> Recording {
        self.0.lock().clone()
    }
}

struct RecordingView(Recorder);

impl ViewPort for RecordingView {
    fn set_planar_image(&mut self, image: ArrayView2<'_, f64>) {
        let mut rec = self.0.0.lock();
        rec.images += 1;
        rec.last_image = Some(image.to_owned());
    }

    fn set_line_data(&mut self, _xs: &[f64], ys: &[f64]) {
        let mut rec = self.0.0.lock();
        rec.lines += 1;
        rec.last_line = Some(ys.to_vec());
    }

    fn auto_range(&mut self) {
        self.0.0.lock().auto_ranges += 1;
    }

    fn set_color_levels(&mut self, levels: ColorLevels) {
        self.0.0.lock().levels = Some(levels);
    }

    fn clear_color_levels(&mut self) {
        self.0.0.lock().levels = None;
    }

    fn set_marker_value(&mut self, marker: MarkerId, value: f64) {
        self.0.0.lock().markers.insert(marker, value);
    }

    fn set_marker_bounds(&mut self, marker: MarkerId, min: f64, max: f64) {
        self.0.0.lock().bounds.insert(marker, (min, max));
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.0.lock().visible = Some(visible);
    }

    fn on_marker_moved(&mut self, _callback: MarkerCallback) {}
}

/// Six recording views plus their recorders, indexed by `SliceKind::index`
pub fn recording_views() -> (ViewPorts, Vec<Recorder>) {
    let recorders: Vec<Recorder> = (0..6).map(|_| Recorder::default()).collect();
    let boxed = |i: usize| -> Box<dyn ViewPort> { Box::new(RecordingView(recorders[i].clone())) };
    let views = ViewPorts::new(boxed(0), boxed(1), boxed(2), boxed(3), boxed(4), boxed(5));
    (views, recorders)
}
