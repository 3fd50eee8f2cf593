//! Grid of the six cross-section views

use egui::Ui;
use egui_extras::{Size, StripBuilder};

use it_core::SliceKind;

use crate::handle::CrossSectionPanel;

/// Rows of the grid; columns share an axis
pub const ROWS: [[SliceKind; 2]; 3] = [
    [SliceKind::XLine, SliceKind::ZLine],
    [SliceKind::XzPlane, SliceKind::YzPlane],
    [SliceKind::XyPlane, SliceKind::YLine],
];

/// Lays out the views in a 3x2 grid, dropping hidden cells and empty rows
pub struct CrossSectionLayout {
    panels: Vec<Box<dyn CrossSectionPanel>>,
}

impl CrossSectionLayout {
    /// Panels are reordered by their kind
    pub fn new(mut panels: Vec<Box<dyn CrossSectionPanel>>) -> Self {
        panels.sort_by_key(|panel| panel.kind().index());
        Self { panels }
    }

    fn panel_mut(&mut self, kind: SliceKind) -> Option<&mut Box<dyn CrossSectionPanel>> {
        self.panels.iter_mut().find(|panel| panel.kind() == kind)
    }

    /// Visible cells per non-empty row
    pub fn visible_rows(&self) -> Vec<Vec<SliceKind>> {
        ROWS.iter()
            .map(|row| {
                row.iter()
                    .copied()
                    .filter(|kind| {
                        self.panels
                            .iter()
                            .any(|panel| panel.kind() == *kind && panel.is_visible())
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|cells| !cells.is_empty())
            .collect()
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let rows = self.visible_rows();

        StripBuilder::new(ui)
            .sizes(Size::remainder(), rows.len())
            .vertical(|mut strip| {
                for cells in &rows {
                    strip.cell(|ui| {
                        StripBuilder::new(ui)
                            .sizes(Size::remainder(), cells.len())
                            .horizontal(|mut strip| {
                                for kind in cells {
                                    strip.cell(|ui| {
                                        if let Some(panel) = self.panel_mut(*kind) {
                                            panel.ui(ui);
                                        }
                                    });
                                }
                            });
                    });
                }
            });
    }
}
