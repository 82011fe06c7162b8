//! Star System Editor.
//!
//! Grafischer Editor für Sternsysteme: Planeten und Sprungpunkte platzieren,
//! verschieben und ihre Eigenschaften bearbeiten.

use eframe::egui;
use star_system_editor::{
    render, ui, AppController, AppIntent, EditorOptions, EditorSession, StarSystem,
};
use std::sync::Arc;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        // RUST_LOG überschreibt das Standard-Level
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Star System Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Star System Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Star System Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    session: EditorSession,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut session = EditorSession::new();
        session.options = editor_options;

        let mut app = Self {
            session,
            controller: AppController::new(),
            input: ui::InputState::new(),
        };
        app.process_events(vec![AppIntent::OpenSystemRequested {
            system: Arc::new(StarSystem::demo()),
        }]);
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fenster wird geschlossen: offenes System noch über die Hooks speichern
        if self.session.should_exit || ctx.input(|i| i.viewport().close_requested()) {
            if self.session.system.is_some() {
                self.process_events(vec![AppIntent::CloseEditorRequested]);
            }
            if self.session.should_exit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.session));
        events.extend(ui::render_toolbar(ctx, &mut self.session));
        events.extend(ui::render_status_bar(ctx, &self.session));
        events.extend(ui::render_property_editor(ctx, &mut self.session.ui));
        events.extend(ui::show_options_dialog(ctx, &self.session));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(8, 8, 16)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    !self.session.selection.is_empty(),
                    self.session.ui.property_editor.is_some(),
                    &self.session.options,
                ));

                let scene = self.controller.build_render_scene(&self.session);
                let painter = ui.painter_at(rect);
                let mut renderer =
                    render::EguiPainterRenderer::new(&painter, rect, &scene.options);
                render::draw_scene(&scene, &mut renderer);

                if self.session.system.is_none() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Kein System geöffnet. System → Demo-System öffnen",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.session, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.input.is_pointer_down()
        {
            ctx.request_repaint();
        }
    }
}
