//! Use-Case: Gesamtes System skalieren.

use crate::app::hooks::SystemEffect;
use crate::app::EditorSession;
use crate::core::SelectionEntry;
use anyhow::{bail, Context};
use std::sync::Arc;

/// Skaliert alle Positionen und den Systemradius um `factor`.
pub fn scale_system(session: &mut EditorSession, factor: f32) -> anyhow::Result<()> {
    if !factor.is_finite() || factor <= 0.0 {
        bail!("Ungültiger Skalierungsfaktor {}", factor);
    }
    let system = session
        .system
        .as_mut()
        .context("Kein System zum Skalieren geöffnet")?;

    let system = Arc::make_mut(system);
    system.scale(factor);
    let planet_count = system.planets.len();
    let jump_count = system.jumps.len();
    log::info!(
        "System '{}' um Faktor {:.3} skaliert (Radius {:.0})",
        system.name,
        factor,
        system.radius
    );

    let moved = (0..planet_count)
        .map(SelectionEntry::Planet)
        .chain((0..jump_count).map(SelectionEntry::JumpPoint));
    for entry in moved {
        session.schedule(SystemEffect::MarkDirty(entry));
    }
    session.schedule(SystemEffect::RecomputeJumpGeometry);
    session.schedule(SystemEffect::RecomputeSafeLanes);
    session.schedule(SystemEffect::SaveSystem);
    Ok(())
}
