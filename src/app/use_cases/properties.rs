//! Use-Case: Eigenschaften-Editor für Planeten und Sprungpunkte.
//!
//! Der Editor arbeitet auf einer Kopie; erst `apply_property_editor`
//! schreibt zurück ins System.

use crate::app::hooks::SystemEffect;
use crate::app::state::PropertyDraft;
use crate::app::EditorSession;
use crate::core::SelectionEntry;
use anyhow::{bail, Context};
use std::sync::Arc;

/// Öffnet den Editor für `entry` (ersetzt einen bereits offenen Editor).
pub fn open_property_editor(
    session: &mut EditorSession,
    entry: SelectionEntry,
) -> anyhow::Result<()> {
    let system = session
        .system
        .as_deref()
        .context("Kein System geöffnet")?;
    let Some(draft) = PropertyDraft::from_entry(system, entry) else {
        bail!("{:?} existiert nicht in System '{}'", entry, system.name);
    };

    log::info!(
        "Eigenschaften-Editor geöffnet: {}",
        entry.label(system).unwrap_or("?")
    );
    session.ui.property_editor = Some(draft);
    session.ui.tech_input.clear();
    Ok(())
}

/// Schreibt die Arbeitskopie ins System zurück.
///
/// Der Editor bleibt offen; Schließen ist ein eigener Command.
pub fn apply_property_editor(session: &mut EditorSession) -> anyhow::Result<()> {
    let Some(draft) = session.ui.property_editor.clone() else {
        return Ok(());
    };
    let system = session
        .system
        .as_mut()
        .context("Eigenschaften ohne geöffnetes System")?;
    if !draft.entry().exists_in(system) {
        bail!("{:?} existiert nicht mehr", draft.entry());
    }

    let system = Arc::make_mut(system);
    match &draft {
        PropertyDraft::Planet { index, draft } => {
            system.planets[*index].apply_properties(draft);
        }
        PropertyDraft::JumpPoint { index, draft } => {
            system.jumps[*index].apply_properties(draft);
        }
    }
    log::info!("Eigenschaften übernommen: {:?}", draft.entry());

    session.schedule(SystemEffect::MarkDirty(draft.entry()));
    match draft {
        PropertyDraft::Planet { .. } => {
            session.schedule(SystemEffect::RecomputePresence);
            session.schedule(SystemEffect::RecomputeSafeLanes);
        }
        PropertyDraft::JumpPoint { .. } => {
            session.schedule(SystemEffect::RecomputeJumpGeometry);
        }
    }
    session.schedule(SystemEffect::SaveSystem);
    Ok(())
}

/// Verwirft die Arbeitskopie.
pub fn close_property_editor(session: &mut EditorSession) {
    session.ui.property_editor = None;
    session.ui.tech_input.clear();
}
