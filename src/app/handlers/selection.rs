//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::EditorSession;

/// Selektiert alle Planeten und Sprungpunkte.
pub fn select_all(session: &mut EditorSession) {
    use_cases::selection::select_all(session);
}

/// Hebt die Selektion auf.
pub fn clear(session: &mut EditorSession) {
    use_cases::selection::clear_selection(session);
}
