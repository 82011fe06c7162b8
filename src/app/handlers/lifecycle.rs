//! Handler für Öffnen, Speichern und Schließen des Editors.

use crate::app::use_cases;
use crate::app::EditorSession;
use crate::core::StarSystem;
use std::sync::Arc;

/// Öffnet ein System im Editor.
pub fn open_system(session: &mut EditorSession, system: Arc<StarSystem>) {
    use_cases::lifecycle::open_system(session, system);
}

/// Merkt das Speichern vor.
pub fn save_system(session: &mut EditorSession) {
    use_cases::lifecycle::save_system(session);
}

/// Schließt den Editor.
pub fn close_editor(session: &mut EditorSession) {
    use_cases::lifecycle::close_editor(session);
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(session: &mut EditorSession) {
    session.should_exit = true;
}
