use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Widget colors for one mode
struct Palette {
    panel_bg: Color32,
    extreme_bg: Color32,
    widget_bg: Color32,
    hover: Color32,
    active: Color32,
    stroke: Color32,
    text: Color32,
}

impl Palette {
    fn for_theme(theme: &Theme) -> Self {
        if theme.dark_mode {
            Self {
                panel_bg: Color32::from_rgb(31, 31, 31),
                extreme_bg: Color32::from_rgb(23, 23, 23),
                widget_bg: Color32::from_rgb(40, 40, 40),
                hover: Color32::from_rgb(50, 50, 50),
                active: Color32::from_rgb(60, 60, 60),
                stroke: Color32::from_rgb(70, 70, 70),
                text: Color32::from_rgb(220, 220, 220),
            }
        } else {
            Self {
                panel_bg: Color32::from_rgb(242, 242, 242),
                extreme_bg: Color32::WHITE,
                widget_bg: Color32::from_rgb(228, 228, 228),
                hover: Color32::from_rgb(214, 214, 214),
                active: Color32::from_rgb(200, 200, 200),
                stroke: Color32::from_rgb(170, 170, 170),
                text: Color32::from_rgb(30, 30, 30),
            }
        }
    }
}

/// Apply the application theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };
    let palette = Palette::for_theme(theme);
    let accent = accent_color();

    visuals.window_fill = palette.panel_bg;
    visuals.panel_fill = palette.panel_bg;
    visuals.extreme_bg_color = palette.extreme_bg;
    visuals.faint_bg_color = palette.widget_bg;

    let widgets = [
        (&mut visuals.widgets.noninteractive, palette.widget_bg),
        (&mut visuals.widgets.inactive, palette.widget_bg),
        (&mut visuals.widgets.hovered, palette.hover),
        (&mut visuals.widgets.active, palette.active),
    ];
    for (widget, fill) in widgets {
        widget.bg_fill = fill;
        widget.bg_stroke = Stroke::new(1.0, palette.stroke);
        widget.fg_stroke = Stroke::new(1.0, palette.text);
        widget.rounding = Rounding::same(4.0);
    }
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);

    visuals.selection.bg_fill = accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 150, 250)
}

/// Color for error messages
pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}
