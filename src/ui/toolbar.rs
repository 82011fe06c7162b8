//! Toolbar für Strukturänderungen: Planet anlegen, System skalieren.

use crate::app::{AppIntent, EditorSession};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// Nur die Eingabefelder in `session.ui` werden direkt verändert.
pub fn render_toolbar(ctx: &egui::Context, session: &mut EditorSession) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let has_system = session.system.is_some();
    let has_selection = !session.selection.is_empty();
    let ui_state = &mut session.ui;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_enabled_ui(has_system, |ui| {
            ui.horizontal(|ui| {
                ui.label("Neuer Planet:");
                let name_field = ui.add(
                    egui::TextEdit::singleline(&mut ui_state.new_planet_name)
                        .hint_text("Name")
                        .desired_width(140.0),
                );
                let submitted =
                    name_field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let can_add = !ui_state.new_planet_name.trim().is_empty();
                if ui
                    .add_enabled(can_add, egui::Button::new("Hinzufügen"))
                    .clicked()
                    || (submitted && can_add)
                {
                    events.push(AppIntent::AddPlanetRequested {
                        name: std::mem::take(&mut ui_state.new_planet_name),
                    });
                }

                ui.separator();

                ui.label("Skalieren:");
                ui.add(
                    egui::DragValue::new(&mut ui_state.scale_factor_input)
                        .range(0.01..=100.0)
                        .speed(0.01),
                );
                if ui.button("Anwenden").clicked() {
                    events.push(AppIntent::ScaleSystemRequested {
                        factor: ui_state.scale_factor_input,
                    });
                    ui_state.scale_factor_input = 1.0;
                }

                ui.separator();

                if ui
                    .add_enabled(has_selection, egui::Button::new("Bearbeiten"))
                    .clicked()
                {
                    events.push(AppIntent::EditPropertiesRequested);
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Entfernen"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                }

                ui.separator();

                if ui.button("−").on_hover_text("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                }
                if ui.button("+").on_hover_text("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                }
                if ui.button("Einpassen").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                }
            });
        });
    });

    events
}
