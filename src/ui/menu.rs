//! Top-Menü (System, Edit, View).

use crate::app::{AppIntent, EditorSession};
use crate::core::StarSystem;
use std::sync::Arc;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, session: &EditorSession) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let has_system = session.system.is_some();
    let has_selection = !session.selection.is_empty();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("System", |ui| {
                if ui.button("Demo-System öffnen").clicked() {
                    events.push(AppIntent::OpenSystemRequested {
                        system: Arc::new(StarSystem::demo()),
                    });
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(has_system, egui::Button::new("Save (Ctrl+S)"))
                    .clicked()
                {
                    events.push(AppIntent::SaveSystemRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_system, egui::Button::new("Editor schließen"))
                    .clicked()
                {
                    events.push(AppIntent::CloseEditorRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(has_system, egui::Button::new("Alles selektieren (Ctrl+A)"))
                    .clicked()
                {
                    events.push(AppIntent::SelectAllRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_selection, egui::Button::new("Selektion aufheben (Esc)"))
                    .clicked()
                {
                    events.push(AppIntent::ClearSelectionRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_selection, egui::Button::new("Eigenschaften..."))
                    .clicked()
                {
                    events.push(AppIntent::EditPropertiesRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_selection, egui::Button::new("Entfernen (Del)"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }
                if ui.button("Zoom Out (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
                if ui.button("System einpassen (Home)").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                ui.separator();

                let mut show_grid = session.view.show_grid;
                if ui.checkbox(&mut show_grid, "Gitter").changed() {
                    events.push(AppIntent::ToggleGridRequested);
                }
            });
        });
    });

    events
}
