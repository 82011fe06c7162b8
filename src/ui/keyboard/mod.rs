//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    has_selection: bool,
    property_editor_open: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Ctrl+S (Speichern), Ctrl+A (Alle selektieren), Escape
    let (modifiers, key_s_pressed, key_a_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::A),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_s_pressed {
        events.push(AppIntent::SaveSystemRequested);
    }

    if key_escape_pressed {
        if property_editor_open {
            events.push(AppIntent::PropertyEditorCancelled);
        } else if has_selection {
            events.push(AppIntent::ClearSelectionRequested);
        }
    }

    // Textfelder behalten einfache Tasten für sich
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    if modifiers.command && key_a_pressed {
        events.push(AppIntent::SelectAllRequested);
    }

    let (key_del_pressed, key_plus_pressed, key_minus_pressed, key_home_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::Delete),
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Home),
            )
        });

    if key_del_pressed && has_selection {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if !modifiers.command {
        if key_plus_pressed {
            events.push(AppIntent::ZoomInRequested);
        }
        if key_minus_pressed {
            events.push(AppIntent::ZoomOutRequested);
        }
        if key_home_pressed {
            events.push(AppIntent::ResetCameraRequested);
        }
    }

    events
}
