//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::EditorSession;

/// Passt die Kamera auf den Systemradius ein.
pub fn fit_camera(session: &mut EditorSession) {
    use_cases::camera::fit_to_system(session);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(session: &mut EditorSession) {
    use_cases::camera::zoom_in(session);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(session: &mut EditorSession) {
    use_cases::camera::zoom_out(session);
}

/// Aktualisiert die Viewport-Größe in der Sitzung.
pub fn set_viewport_size(session: &mut EditorSession, size: [f32; 2]) {
    use_cases::viewport::resize(session, size);
}

/// Blendet das Gitter ein oder aus.
pub fn toggle_grid(session: &mut EditorSession) {
    use_cases::viewport::toggle_grid(session);
}
