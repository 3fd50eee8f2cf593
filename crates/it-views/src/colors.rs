//! Color maps for planar images

use egui::Color32;
use it_core::Colormap;

/// Color for a normalized sample under `colormap`
pub fn colormap_color(colormap: Colormap, t: f32) -> Color32 {
    match colormap {
        Colormap::Gray => gray_color(t),
        Colormap::Viridis => viridis_color(t),
        Colormap::Plasma => plasma_color(t),
    }
}

pub fn gray_color(t: f32) -> Color32 {
    let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_gray(v)
}

/// Viridis color map, piecewise linear over five stops
pub fn viridis_color(t: f32) -> Color32 {
    const STOPS: [[f32; 3]; 5] = [
        [68.0, 1.0, 84.0],
        [59.0, 82.0, 139.0],
        [33.0, 145.0, 140.0],
        [94.0, 201.0, 98.0],
        [253.0, 231.0, 37.0],
    ];
    interpolate(&STOPS, t)
}

/// Plasma color map
pub fn plasma_color(t: f32) -> Color32 {
    const STOPS: [[f32; 3]; 5] = [
        [13.0, 8.0, 135.0],
        [126.0, 3.0, 168.0],
        [204.0, 71.0, 120.0],
        [248.0, 149.0, 64.0],
        [240.0, 249.0, 33.0],
    ];
    interpolate(&STOPS, t)
}

fn interpolate(stops: &[[f32; 3]], t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let segments = (stops.len() - 1) as f32;
    let scaled = t * segments;
    let lower = (scaled.floor() as usize).min(stops.len() - 2);
    let s = scaled - lower as f32;

    let [r0, g0, b0] = stops[lower];
    let [r1, g1, b1] = stops[lower + 1];
    Color32::from_rgb(
        (r0 * (1.0 - s) + r1 * s) as u8,
        (g0 * (1.0 - s) + g1 * s) as u8,
        (b0 * (1.0 - s) + b1 * s) as u8,
    )
}
