//! Use-Case: Verschieben selektierter Planeten und Sprungpunkte.

use crate::app::EditorSession;
use crate::core::SelectionEntry;
use std::sync::Arc;

/// Verschiebt alle selektierten Objekte um den gegebenen Welt-Offset.
pub fn move_selected_entities(session: &mut EditorSession, delta_world: glam::Vec2) {
    if delta_world == glam::Vec2::ZERO || session.selection.is_empty() {
        return;
    }

    let Some(system) = session.system.as_mut() else {
        return;
    };
    let system = Arc::make_mut(system);

    for entry in session.selection.iter() {
        match entry {
            SelectionEntry::Planet(index) => {
                if let Some(planet) = system.planets.get_mut(index) {
                    planet.position += delta_world;
                }
            }
            SelectionEntry::JumpPoint(index) => {
                if let Some(jump) = system.jumps.get_mut(index) {
                    jump.position += delta_world;
                }
            }
        }
    }
}

/// Manuelle Positionierung: `auto_position` aller selektierten Sprungpunkte aufheben.
pub fn clear_auto_position_of_selected(session: &mut EditorSession) {
    let Some(system) = session.system.as_mut() else {
        return;
    };

    let needs_update = session.selection.iter().any(|entry| match entry {
        SelectionEntry::JumpPoint(index) => system.jumps.get(index).is_some_and(|j| j.auto_position),
        SelectionEntry::Planet(_) => false,
    });
    if !needs_update {
        return;
    }

    let system = Arc::make_mut(system);
    for entry in session.selection.iter() {
        if let SelectionEntry::JumpPoint(index) = entry {
            if let Some(jump) = system.jumps.get_mut(index) {
                if jump.auto_position {
                    log::debug!("Sprungpunkt nach {}: automatische Position aufgehoben", jump.target);
                }
                jump.auto_position = false;
            }
        }
    }
}
