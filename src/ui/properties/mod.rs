//! Eigenschaften-Editor für Planeten und Sprungpunkte.
//!
//! Bearbeitet die Arbeitskopie in `UiState` direkt; ins System gelangen die
//! Werte erst über `PropertyEditorApplied`.

mod planet;

use crate::app::{AppIntent, PropertyDraft, UiState};
use crate::core::JumpPoint;

/// Zeigt den Eigenschaften-Editor, falls geöffnet, und gibt erzeugte Events zurück.
pub fn render_property_editor(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let UiState {
        property_editor,
        tech_input,
        ..
    } = ui_state;
    let Some(draft) = property_editor.as_mut() else {
        return events;
    };

    let title = match draft {
        PropertyDraft::Planet { draft, .. } => format!("Planet: {}", draft.name),
        PropertyDraft::JumpPoint { draft, .. } => format!("Sprungpunkt → {}", draft.target),
    };

    let mut open = true;
    egui::Window::new(title)
        .id(egui::Id::new("property_editor"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            match draft {
                PropertyDraft::Planet { draft, .. } => {
                    planet::render_planet_fields(ui, draft, tech_input);
                }
                PropertyDraft::JumpPoint { draft, .. } => render_jump_fields(ui, draft),
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Übernehmen").clicked() {
                    events.push(AppIntent::PropertyEditorApplied);
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::PropertyEditorCancelled);
                }
            });
        });

    if !open {
        events.push(AppIntent::PropertyEditorCancelled);
    }

    events
}

fn render_jump_fields(ui: &mut egui::Ui, jump: &mut JumpPoint) {
    ui.label(format!(
        "Position: ({:.1}, {:.1})",
        jump.position.x, jump.position.y
    ));
    ui.checkbox(&mut jump.auto_position, "Automatisch positionieren");
    ui.checkbox(&mut jump.hidden, "Versteckt");
    ui.checkbox(&mut jump.exit_only, "Nur Ausgang");
}
