//! Use-Case-Funktionen für Viewport-Zustand.

use super::camera;
use crate::app::EditorSession;

/// Aktualisiert die gespeicherte Viewport-Größe.
///
/// Die erste gültige Größe nach dem Öffnen passt die Kamera ans System an.
pub fn resize(session: &mut EditorSession, size: [f32; 2]) {
    let was_unsized = session.view.viewport_size[0] <= 0.0 || session.view.viewport_size[1] <= 0.0;
    session.view.viewport_size = size;

    if was_unsized && size[0] > 0.0 && size[1] > 0.0 && session.system.is_some() {
        camera::fit_to_system(session);
    }
}

/// Schaltet das Gitter um.
pub fn toggle_grid(session: &mut EditorSession) {
    session.view.show_grid = !session.view.show_grid;
}
