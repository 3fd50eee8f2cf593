//! Modal dialog that assembles a [`LoadRequest`]

use std::path::PathBuf;
use egui::{Color32, ComboBox, Context, DragValue, Grid, RichText};
use tracing::debug;

use it_data::{FormatTag, LoadRequest, LoadResult};

use crate::theme::error_color;

/// State of the load dialog between frames
pub struct LoadDialog {
    open: bool,
    path: String,
    format: FormatTag,
    shape: [usize; 3],
    error: Option<String>,
}

impl Default for LoadDialog {
    fn default() -> Self {
        Self {
            open: false,
            path: String::new(),
            format: FormatTag::Npy,
            shape: [0; 3],
            error: None,
        }
    }
}

impl LoadDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog; the previous path and format are kept
    pub fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn format(&self) -> FormatTag {
        self.format
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Keep the dialog open and show `error`
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn set_format(&mut self, format: FormatTag) {
        self.format = format;
    }

    pub fn set_shape(&mut self, shape: [usize; 3]) {
        self.shape = shape;
    }

    /// Whether the Nx/Ny/Nz fields apply to the selected format
    pub fn shape_enabled(&self) -> bool {
        !self.format.is_self_describing()
    }

    /// Build and validate the request for the current inputs
    pub fn build_request(&self) -> LoadResult<LoadRequest> {
        let mut request = LoadRequest::new(PathBuf::from(self.path.trim()), self.format);
        if self.shape_enabled() {
            request = request.with_shape_hint(self.shape);
        }
        request.validate()?;
        Ok(request)
    }

    /// Draw the dialog. Returns a validated request when OK is pressed; the
    /// dialog stays open until the caller closes it.
    pub fn show(&mut self, ctx: &Context) -> Option<LoadRequest> {
        if !self.open {
            return None;
        }

        let mut submitted = None;
        let mut cancel = false;

        egui::Window::new("Load File")
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                Grid::new("load_dialog_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Format:");
                        ComboBox::from_id_source("load_format")
                            .selected_text(self.format.label())
                            .show_ui(ui, |ui| {
                                for tag in FormatTag::ALL {
                                    ui.selectable_value(&mut self.format, tag, tag.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Shape:");
                        let enabled = self.shape_enabled();
                        ui.horizontal(|ui| {
                            for (label, value) in ["Nx", "Ny", "Nz"].iter().zip(self.shape.iter_mut()) {
                                ui.label(*label);
                                ui.add_enabled(enabled, DragValue::new(value).clamp_range(0..=1_000_000));
                            }
                        });
                        ui.end_row();

                        ui.label("File:");
                        ui.horizontal(|ui| {
                            ui.text_edit_singleline(&mut self.path);
                            if ui.button("Browse...").clicked() {
                                self.browse();
                            }
                        });
                        ui.end_row();
                    });

                if let Some(error) = &self.error {
                    ui.add_space(4.0);
                    ui.label(RichText::new(error).color(error_color()));
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    let ok = egui::Button::new(RichText::new("OK").color(Color32::WHITE))
                        .fill(Color32::from_rgb(76, 175, 80));
                    if ui.add(ok).clicked() {
                        match self.build_request() {
                            Ok(request) => submitted = Some(request),
                            Err(e) => self.error = Some(e.to_string()),
                        }
                    }
                });
            });

        if cancel {
            self.close();
        }
        submitted
    }

    fn browse(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter(self.format.filter_name(), self.format.extensions())
            .pick_file();

        if let Some(path) = picked {
            debug!("Picked {}", path.display());
            if let Some(format) = FormatTag::from_path(&path) {
                self.format = format;
            }
            self.path = path.display().to_string();
            self.error = None;
        }
    }
}
