use std::sync::Arc;
use egui::Ui;
use ndarray::ArrayView2;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use it_core::{ColorLevels, MarkerCallback, MarkerId, SliceKind, ViewPort};

/// A view that can draw itself into a layout cell
pub trait CrossSectionPanel: Send + Sync {
    fn kind(&self) -> SliceKind;

    fn is_visible(&self) -> bool;

    fn ui(&mut self, ui: &mut Ui);
}

/// Shared handle to a view.
///
/// The controller writes through one clone (as a [`ViewPort`]) and the
/// layout draws through another.
pub struct ViewHandle<V>(Arc<RwLock<V>>);

impl<V> Clone for ViewHandle<V> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<V> ViewHandle<V> {
    pub fn new(view: V) -> Self {
        Self(Arc::new(RwLock::new(view)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, V> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, V> {
        self.0.write()
    }
}

impl<V: ViewPort + Sync> ViewPort for ViewHandle<V> {
    fn set_planar_image(&mut self, image: ArrayView2<'_, f64>) {
        self.0.write().set_planar_image(image);
    }

    fn set_line_data(&mut self, xs: &[f64], ys: &[f64]) {
        self.0.write().set_line_data(xs, ys);
    }

    fn auto_range(&mut self) {
        self.0.write().auto_range();
    }

    fn set_color_levels(&mut self, levels: ColorLevels) {
        self.0.write().set_color_levels(levels);
    }

    fn clear_color_levels(&mut self) {
        self.0.write().clear_color_levels();
    }

    fn set_marker_value(&mut self, marker: MarkerId, value: f64) {
        self.0.write().set_marker_value(marker, value);
    }

    fn set_marker_bounds(&mut self, marker: MarkerId, min: f64, max: f64) {
        self.0.write().set_marker_bounds(marker, min, max);
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.write().set_visible(visible);
    }

    fn on_marker_moved(&mut self, callback: MarkerCallback) {
        self.0.write().on_marker_moved(callback);
    }
}

impl<V: CrossSectionPanel> CrossSectionPanel for ViewHandle<V> {
    fn kind(&self) -> SliceKind {
        self.0.read().kind()
    }

    fn is_visible(&self) -> bool {
        self.0.read().is_visible()
    }

    fn ui(&mut self, ui: &mut Ui) {
        self.0.write().ui(ui);
    }
}
