//! Image view for one plane through the volume

use egui::{vec2, Color32, ColorImage, RichText, TextureHandle, TextureOptions, Ui};
use egui_plot::{Plot, PlotImage, PlotPoint};
use ndarray::{Array2, ArrayView2};
use tracing::debug;

use it_core::{ColorLevels, Colormap, MarkerCallback, MarkerId, SliceKind, ViewPort};

use crate::colors::colormap_color;
use crate::handle::CrossSectionPanel;
use crate::marker::{MarkerDrag, MarkerLine};

/// Planar cross-section drawn as a texture with its draggable markers.
///
/// The first array axis runs horizontally, the second vertically (upwards).
pub struct PlanarView {
    kind: SliceKind,
    colormap: Colormap,
    image: Option<Array2<f64>>,
    /// Levels pushed by the controller; without them the view scales to its own image
    pinned_levels: Option<ColorLevels>,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
    markers: Vec<MarkerLine>,
    drag: MarkerDrag,
    callback: Option<MarkerCallback>,
    visible: bool,
    reset_pending: bool,
}

impl PlanarView {
    pub fn new(kind: SliceKind, colormap: Colormap) -> Self {
        debug_assert!(kind.is_planar());
        let markers = MarkerId::ALL
            .into_iter()
            .filter(|marker| marker.host() == kind)
            .map(MarkerLine::new)
            .collect();

        Self {
            kind,
            colormap,
            image: None,
            pinned_levels: None,
            texture: None,
            texture_dirty: false,
            markers,
            drag: MarkerDrag::default(),
            callback: None,
            visible: true,
            reset_pending: false,
        }
    }

    pub fn markers(&self) -> &[MarkerLine] {
        &self.markers
    }

    pub fn image(&self) -> Option<&Array2<f64>> {
        self.image.as_ref()
    }

    /// Levels used for the next texture upload
    pub fn effective_levels(&self) -> Option<ColorLevels> {
        self.pinned_levels
            .or_else(|| self.image.as_ref().and_then(|image| ColorLevels::from_plane(image.view())))
    }

    /// Rasterize the current image, top row first
    pub fn color_image(&self) -> Option<ColorImage> {
        let image = self.image.as_ref()?;
        let (width, height) = image.dim();
        if width == 0 || height == 0 {
            return None;
        }
        let levels = self.effective_levels().unwrap_or(ColorLevels::new(0.0, 1.0));

        let mut pixels = ColorImage::new([width, height], Color32::BLACK);
        for row in 0..height {
            let j = height - 1 - row;
            for i in 0..width {
                let t = levels.normalize(image[[i, j]]);
                pixels.pixels[row * width + i] = colormap_color(self.colormap, t);
            }
        }
        Some(pixels)
    }

    fn axis_labels(&self) -> (&'static str, &'static str) {
        match self.kind {
            SliceKind::XzPlane => ("x", "z"),
            SliceKind::YzPlane => ("y", "z"),
            _ => ("x", "y"),
        }
    }

    fn upload_texture(&mut self, ui: &Ui) {
        if !self.texture_dirty {
            return;
        }
        self.texture_dirty = false;

        let Some(pixels) = self.color_image() else {
            self.texture = None;
            return;
        };
        match &mut self.texture {
            Some(texture) => texture.set(pixels, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ui.ctx().load_texture(self.kind.title(), pixels, TextureOptions::NEAREST));
            }
        }
    }

    fn find_marker(&mut self, marker: MarkerId) -> Option<&mut MarkerLine> {
        let found = self.markers.iter_mut().find(|line| line.id == marker);
        if found.is_none() {
            debug!("{} has no {:?} marker", self.kind.title(), marker);
        }
        found
    }
}

impl ViewPort for PlanarView {
    fn set_planar_image(&mut self, image: ArrayView2<'_, f64>) {
        self.image = Some(image.to_owned());
        self.texture_dirty = true;
    }

    fn auto_range(&mut self) {
        self.reset_pending = true;
    }

    fn set_color_levels(&mut self, levels: ColorLevels) {
        self.pinned_levels = Some(levels);
        self.texture_dirty = true;
    }

    fn clear_color_levels(&mut self) {
        self.pinned_levels = None;
        self.texture_dirty = true;
    }

    fn set_marker_value(&mut self, marker: MarkerId, value: f64) {
        if let Some(line) = self.find_marker(marker) {
            line.value = value;
        }
    }

    fn set_marker_bounds(&mut self, marker: MarkerId, min: f64, max: f64) {
        if let Some(line) = self.find_marker(marker) {
            line.min = min;
            line.max = max;
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn on_marker_moved(&mut self, callback: MarkerCallback) {
        self.callback = Some(callback);
    }
}

impl CrossSectionPanel for PlanarView {
    fn kind(&self) -> SliceKind {
        self.kind
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn ui(&mut self, ui: &mut Ui) {
        self.upload_texture(ui);
        ui.label(RichText::new(self.kind.title()).strong());

        let (x_label, y_label) = self.axis_labels();
        let mut plot = Plot::new(self.kind.title())
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .allow_drag(false)
            .allow_boxed_zoom(true)
            .show_grid(false);
        if self.reset_pending {
            plot = plot.reset();
            self.reset_pending = false;
        }

        let texture = self.texture.as_ref().map(|t| t.id());
        let dims = self.image.as_ref().map(|image| image.dim());
        let active = self.drag.active();
        let markers = &mut self.markers;
        let drag = &mut self.drag;

        let response = plot.show(ui, |plot_ui| {
            if let (Some(texture), Some((width, height))) = (texture, dims) {
                let center = PlotPoint::new((width as f64 - 1.0) / 2.0, (height as f64 - 1.0) / 2.0);
                plot_ui.image(PlotImage::new(texture, center, vec2(width as f32, height as f32)));
            }
            for marker in markers.iter() {
                marker.draw(plot_ui, active == Some(marker.id));
            }
            drag.update(plot_ui, markers)
        });

        if let (Some((marker, value)), Some(callback)) = (response.inner, self.callback.as_mut()) {
            callback(marker, value);
        }
    }
}
