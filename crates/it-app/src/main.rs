//! Main application entry point

use std::path::Path;
use eframe::egui::{self, Context};
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use it_core::{state::SETTINGS_FILE, ViewerSettings};
use it_ui::{LoadDialog, MenuAction, Theme};

mod session;

use session::ImageSession;

/// Main application state
struct ImageToolApp {
    session: ImageSession,
    load_dialog: LoadDialog,
}

impl ImageToolApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: ViewerSettings, session: ImageSession) -> Self {
        it_ui::apply_theme(&cc.egui_ctx, &Theme { dark_mode: settings.dark_mode });
        Self {
            session,
            load_dialog: LoadDialog::new(),
        }
    }

    fn handle_action(&mut self, ctx: &Context, action: MenuAction) {
        match action {
            MenuAction::LoadFile => self.load_dialog.open(),
            MenuAction::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            MenuAction::AutoscaleAll => self.session.autoscale_all(),
        }
    }

    fn show_load_dialog(&mut self, ctx: &Context) {
        let Some(request) = self.load_dialog.show(ctx) else {
            return;
        };

        match self.session.load(&request) {
            Ok(mode) => {
                info!("Showing {} in {:?} mode", request.file_name(), mode);
                self.load_dialog.close();
            }
            Err(e) => {
                warn!("Load failed: {}", e);
                self.load_dialog.set_error(e);
            }
        }
    }
}

impl eframe::App for ImageToolApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if let Some(action) = it_ui::shortcut_action(ctx) {
            self.handle_action(ctx, action);
        }
        if let Some(action) = it_ui::menu_bar(ctx) {
            self.handle_action(ctx, action);
        }

        if !self.load_dialog.is_open() {
            for nudge in it_ui::arrow_nudges(ctx) {
                self.session.nudge(nudge);
            }
        }

        it_ui::status_bar(ctx, &self.session.status());
        egui::CentralPanel::default().show(ctx, |ui| {
            self.session.layout_mut().ui(ui);
        });

        self.show_load_dialog(ctx);

        // drags recorded while drawing are applied before the next frame
        if self.session.pump_events() > 0 {
            ctx.request_repaint();
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting image tool");

    let settings = ViewerSettings::load_or_default(Path::new(SETTINGS_FILE));
    let session = ImageSession::new(&settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: if settings.dark_mode { eframe::Theme::Dark } else { eframe::Theme::Light },
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Image Tool",
        options,
        Box::new(move |cc| Box::new(ImageToolApp::new(cc, settings, session))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
