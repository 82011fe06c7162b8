//! Use-Case: Selektierte Planeten und Sprungpunkte entfernen.

use crate::app::hooks::SystemEffect;
use crate::app::EditorSession;
use crate::core::SelectionEntry;
use std::sync::Arc;

/// Entfernt alle selektierten Objekte aus dem System.
///
/// Indizes verschieben sich dabei; Selektion und offener Eigenschaften-Editor
/// werden deshalb zurückgesetzt.
pub fn remove_selected(session: &mut EditorSession) {
    if session.selection.is_empty() {
        return;
    }
    let Some(system) = session.system.as_mut() else {
        return;
    };

    let mut planets: Vec<usize> = Vec::new();
    let mut jumps: Vec<usize> = Vec::new();
    for entry in session.selection.iter() {
        match entry {
            SelectionEntry::Planet(index) => planets.push(index),
            SelectionEntry::JumpPoint(index) => jumps.push(index),
        }
    }
    // Absteigend, damit die restlichen Indizes gültig bleiben
    planets.sort_unstable_by(|a, b| b.cmp(a));
    jumps.sort_unstable_by(|a, b| b.cmp(a));

    let system = Arc::make_mut(system);
    for &index in &planets {
        if index < system.planets.len() {
            let removed = system.planets.remove(index);
            log::info!("Planet '{}' entfernt", removed.name);
        }
    }
    for &index in &jumps {
        if index < system.jumps.len() {
            let removed = system.jumps.remove(index);
            log::info!("Sprungpunkt nach '{}' entfernt", removed.target);
        }
    }

    super::clear_selection(session);
    session.ui.property_editor = None;

    if !planets.is_empty() {
        session.schedule(SystemEffect::RecomputePresence);
    }
    if !jumps.is_empty() {
        session.schedule(SystemEffect::RecomputeJumpGeometry);
    }
    session.schedule(SystemEffect::RecomputeSafeLanes);
    session.schedule(SystemEffect::SaveSystem);
}
