//! Handler für Eigenschaften-Editor und Optionen.

use crate::app::use_cases;
use crate::app::EditorSession;
use crate::core::SelectionEntry;
use crate::shared::EditorOptions;

/// Öffnet den Eigenschaften-Editor für ein Objekt.
pub fn open_property_editor(
    session: &mut EditorSession,
    entry: SelectionEntry,
) -> anyhow::Result<()> {
    use_cases::properties::open_property_editor(session, entry)
}

/// Übernimmt die Arbeitskopie ins System.
pub fn apply_property_editor(session: &mut EditorSession) -> anyhow::Result<()> {
    use_cases::properties::apply_property_editor(session)
}

/// Schließt den Eigenschaften-Editor.
pub fn close_property_editor(session: &mut EditorSession) {
    use_cases::properties::close_property_editor(session);
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(session: &mut EditorSession) {
    session.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(session: &mut EditorSession) {
    session.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen; der Zoom wird an geänderte Grenzen angepasst.
pub fn apply_options(session: &mut EditorSession, options: EditorOptions) {
    session.options = options.sanitized();
    let (min, max) = session.options.zoom_bounds();
    let zoom = session.view.camera.zoom;
    session.view.camera.set_zoom_clamped(zoom, min, max);
}

/// Persistiert die aktuellen Optionen in der Konfigurationsdatei.
pub fn save_options(session: &mut EditorSession) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    session.options.save_to_file(&path)
}

/// Entfernt die Fehlermeldung aus der Status-Bar.
pub fn dismiss_status_message(session: &mut EditorSession) {
    session.ui.status_message = None;
}
