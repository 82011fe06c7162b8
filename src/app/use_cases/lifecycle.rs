//! Use-Case: Editor für ein System öffnen, speichern und schließen.

use super::{camera, selection};
use crate::app::hooks::SystemEffect;
use crate::app::EditorSession;
use crate::core::StarSystem;
use std::sync::Arc;

/// Öffnet `system` im Editor; vorheriger Sitzungszustand wird verworfen.
pub fn open_system(session: &mut EditorSession, system: Arc<StarSystem>) {
    log::info!(
        "System '{}' geöffnet: {} Planeten, {} Sprungpunkte",
        system.name,
        system.planet_count(),
        system.jump_count()
    );
    session.system = Some(system);
    reset_transient_state(session);
    camera::fit_to_system(session);
}

/// Merkt das Speichern des aktuellen Systems vor.
pub fn save_system(session: &mut EditorSession) {
    if session.system.is_none() {
        log::warn!("Speichern ohne geöffnetes System ignoriert");
        return;
    }
    session.schedule(SystemEffect::SaveSystem);
}

/// Schließt den Editor. Ausstehende Aufträge müssen vorher abgearbeitet sein.
pub fn close_editor(session: &mut EditorSession) {
    let Some(system) = session.system.take() else {
        return;
    };
    reset_transient_state(session);
    session.pending_effects.clear();
    log::info!("Editor für '{}' geschlossen", system.name);
}

fn reset_transient_state(session: &mut EditorSession) {
    selection::clear_selection(session);
    session.gesture.reset();
    session.gesture.last_press = None;
    session.ui.property_editor = None;
    session.ui.tech_input.clear();
    session.ui.status_message = None;
}
