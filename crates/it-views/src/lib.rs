//! egui views for the image tool
//!
//! Each view implements [`ViewPort`] so the controller can push data into it,
//! and [`CrossSectionPanel`] so the layout can draw it. Both sides share the
//! view through a [`ViewHandle`].

mod colors;
mod handle;
mod layout;
mod line_view;
mod marker;
mod planar_view;

pub use colors::{colormap_color, gray_color, plasma_color, viridis_color};
pub use handle::{CrossSectionPanel, ViewHandle};
pub use layout::{CrossSectionLayout, ROWS};
pub use line_view::LineView;
pub use marker::{MarkerDrag, MarkerLine, GRAB_RADIUS};
pub use planar_view::PlanarView;

use it_core::{Colormap, SliceKind, ViewPort, ViewPorts};

/// Create the six views, returned once as the controller's ports and once
/// as the drawable layout
pub fn build_views(colormap: Colormap) -> (ViewPorts, CrossSectionLayout) {
    let xy = ViewHandle::new(PlanarView::new(SliceKind::XyPlane, colormap));
    let xz = ViewHandle::new(PlanarView::new(SliceKind::XzPlane, colormap));
    let yz = ViewHandle::new(PlanarView::new(SliceKind::YzPlane, colormap));
    let x_line = ViewHandle::new(LineView::new(SliceKind::XLine));
    let y_line = ViewHandle::new(LineView::new(SliceKind::YLine));
    let z_line = ViewHandle::new(LineView::new(SliceKind::ZLine));

    let layout = CrossSectionLayout::new(vec![
        Box::new(xy.clone()),
        Box::new(xz.clone()),
        Box::new(yz.clone()),
        Box::new(x_line.clone()),
        Box::new(y_line.clone()),
        Box::new(z_line.clone()),
    ]);
    let ports = ViewPorts::new(
        boxed(xy),
        boxed(xz),
        boxed(yz),
        boxed(x_line),
        boxed(y_line),
        boxed(z_line),
    );
    (ports, layout)
}

fn boxed<V: ViewPort + Sync + 'static>(view: ViewHandle<V>) -> Box<dyn ViewPort> {
    Box::new(view)
}
