//! Turtle-Sketchpad.
//!
//! Minimales Turtle-Grafik-Sketchpad mit egui: ein Stift mit Position
//! und Blickrichtung zeichnet Liniensegmente auf eine 2D-Leinwand.

use eframe::egui;
use turtle_sketchpad::shared::options::CANVAS_MAX_HEIGHT;
use turtle_sketchpad::{render, ui, AppController, AppIntent, AppState, SketchOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Turtle-Sketchpad v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([640.0, 540.0])
                .with_title("Turtle Sketchpad"),
            ..Default::default()
        };

        eframe::run_native(
            "Turtle Sketchpad",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
}

impl SketchApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SketchOptions::config_path();
        let sketch_options = SketchOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = sketch_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = !events.is_empty();

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl SketchApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));
        events.extend(ui::collect_keyboard_intents(ctx));

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let canvas_size = egui::vec2(available.x, available.y.min(CANVAS_MAX_HEIGHT));
            let (rect, _response) = ui.allocate_exact_size(canvas_size, egui::Sense::hover());

            let scene = self.controller.build_render_scene(&self.state);
            render::draw_scene(ui.painter(), rect, &scene);
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || self.state.show_options_dialog {
            ctx.request_repaint();
        }
    }
}
