use egui::{Context, Key, KeyboardShortcut, Modifiers, TopBottomPanel};
use it_core::{Nudge, StatusReadout};

/// Something the user asked for through the menu or a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    LoadFile,
    Exit,
    AutoscaleAll,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::LoadFile, MenuAction::Exit, MenuAction::AutoscaleAll];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::LoadFile => "Load File...",
            MenuAction::Exit => "Exit",
            MenuAction::AutoscaleAll => "Autoscale All",
        }
    }

    pub fn shortcut(self) -> KeyboardShortcut {
        let key = match self {
            MenuAction::LoadFile => Key::O,
            MenuAction::Exit => Key::W,
            MenuAction::AutoscaleAll => Key::A,
        };
        KeyboardShortcut::new(Modifiers::COMMAND, key)
    }
}

/// Arrow keys and the nudge each one triggers
const ARROWS: [(Key, Nudge); 4] = [
    (Key::ArrowUp, Nudge::Up),
    (Key::ArrowDown, Nudge::Down),
    (Key::ArrowLeft, Nudge::Left),
    (Key::ArrowRight, Nudge::Right),
];

/// Render the main menu bar
pub fn menu_bar(ctx: &Context) -> Option<MenuAction> {
    let mut action = None;

    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                for item in [MenuAction::LoadFile, MenuAction::Exit] {
                    if item == MenuAction::Exit {
                        ui.separator();
                    }
                    if menu_item(ui, item) {
                        action = Some(item);
                    }
                }
            });

            ui.menu_button("View", |ui| {
                if menu_item(ui, MenuAction::AutoscaleAll) {
                    action = Some(MenuAction::AutoscaleAll);
                }
            });
        });
    });

    action
}

fn menu_item(ui: &mut egui::Ui, action: MenuAction) -> bool {
    let shortcut = ui.ctx().format_shortcut(&action.shortcut());
    let clicked = ui
        .add(egui::Button::new(action.label()).shortcut_text(shortcut))
        .clicked();
    if clicked {
        ui.close_menu();
    }
    clicked
}

/// First menu shortcut pressed this frame, unless a text field has focus
pub fn shortcut_action(ctx: &Context) -> Option<MenuAction> {
    if ctx.wants_keyboard_input() {
        return None;
    }
    ctx.input_mut(|input| {
        MenuAction::ALL
            .into_iter()
            .find(|action| input.consume_shortcut(&action.shortcut()))
    })
}

/// Arrow-key nudges for this frame, unless a text field has focus
pub fn arrow_nudges(ctx: &Context) -> Vec<Nudge> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|input| {
        ARROWS
            .iter()
            .filter(|(key, _)| input.key_pressed(*key))
            .map(|(_, nudge)| *nudge)
            .collect()
    })
}

/// Render the position and shape readouts
pub fn status_bar(ctx: &Context, readout: &StatusReadout) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.monospace(readout.position_label());
            ui.separator();
            ui.monospace(readout.shape_label());
        });
    });
}
