//! Handler für strukturelle Änderungen am System.

use crate::app::use_cases;
use crate::app::EditorSession;

/// Legt einen Planeten an.
pub fn add_planet(
    session: &mut EditorSession,
    name: &str,
    world_pos: glam::Vec2,
) -> anyhow::Result<()> {
    use_cases::editing::add_planet(session, name, world_pos)
}

/// Entfernt alle selektierten Objekte.
pub fn remove_selected(session: &mut EditorSession) {
    use_cases::editing::remove_selected(session);
}

/// Skaliert das System.
pub fn scale_system(session: &mut EditorSession, factor: f32) -> anyhow::Result<()> {
    use_cases::editing::scale_system(session, factor)
}
