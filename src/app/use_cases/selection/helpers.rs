//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::state::PendingClick;
use crate::app::EditorSession;
use crate::core::SelectionEntry;

/// Löscht die aktuelle Selektion explizit.
///
/// Eine offene Klick-Entscheidung verliert damit ihre Grundlage und wird verworfen.
pub fn clear_selection(session: &mut EditorSession) {
    session.selection.clear();
    session.gesture.pending = PendingClick::None;
}

/// Selektiert alle Planeten und Sprungpunkte (Planeten zuerst).
pub fn select_all(session: &mut EditorSession) {
    let Some(system) = session.system.as_deref() else {
        return;
    };

    let set = session.selection.entries_mut();
    set.clear();
    set.extend((0..system.planets.len()).map(SelectionEntry::Planet));
    set.extend((0..system.jumps.len()).map(SelectionEntry::JumpPoint));
    session.gesture.pending = PendingClick::None;

    log::info!("Alle {} Objekte selektiert", session.selection.len());
}
