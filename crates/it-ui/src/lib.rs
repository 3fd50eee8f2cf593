//! User interface components for the image tool
//!
//! Menu bar with shortcuts, status readouts, the load dialog and theming.

pub mod load_dialog;
pub mod shell;
pub mod theme;

pub use load_dialog::LoadDialog;
pub use shell::{arrow_nudges, menu_bar, shortcut_action, status_bar, MenuAction};
pub use theme::{apply_theme, Theme};
