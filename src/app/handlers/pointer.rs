//! Handler für Zeigergesten im Viewport.

use crate::app::use_cases;
use crate::app::EditorSession;
use glam::Vec2;

/// Startet eine Geste an der gedrückten Position.
pub fn begin(session: &mut EditorSession, screen_pos: Vec2, additive: bool, time: f64) {
    use_cases::pointer::begin_gesture(session, screen_pos, additive, time);
}

/// Führt die aktive Geste um ein Pixel-Delta fort.
pub fn update(session: &mut EditorSession, delta_px: Vec2, time: f64) {
    use_cases::pointer::update_gesture(session, delta_px, time);
}

/// Beendet die aktive Geste.
pub fn end(session: &mut EditorSession, time: f64) {
    use_cases::pointer::end_gesture(session, time);
}

/// Bricht die aktive Geste ab.
pub fn cancel(session: &mut EditorSession) {
    use_cases::pointer::cancel_gesture(session);
}
