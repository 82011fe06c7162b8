//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, EditorSession};

/// Rendert die Status-Bar und gibt erzeugte Events zurück.
pub fn render_status_bar(ctx: &egui::Context, session: &EditorSession) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(system) = &session.system {
                ui.label(format!(
                    "System: {} | Planeten: {} | Sprungpunkte: {}",
                    system.name,
                    system.planet_count(),
                    system.jump_count()
                ));
            } else {
                ui.label("Kein System geöffnet");
            }

            ui.separator();

            let camera = &session.view.camera;
            let center = camera.center_world();
            ui.label(format!(
                "Zoom: {:.4}x | Mitte: ({:.1}, {:.1})",
                camera.zoom, center.x, center.y
            ));

            ui.separator();

            let selected_count = session.selection.len();
            if selected_count > 0 {
                ui.label(format!("Selektiert: {}", selected_count));
            } else {
                ui.label("Keine Selektion");
            }

            if let Some(message) = &session.ui.status_message {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, message);
                if ui.small_button("✖").clicked() {
                    events.push(AppIntent::StatusMessageDismissed);
                }
            }
        });
    });

    events
}
