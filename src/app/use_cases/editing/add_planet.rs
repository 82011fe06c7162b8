//! Use-Case: Neuen Planeten an einer Weltposition anlegen.

use crate::app::hooks::SystemEffect;
use crate::app::EditorSession;
use crate::core::{Planet, SelectionEntry};
use anyhow::{bail, Context};
use std::sync::Arc;

/// Legt einen unbewohnten Planeten an und selektiert ihn als einzigen.
///
/// Leere oder bereits vergebene Namen werden abgelehnt.
pub fn add_planet(
    session: &mut EditorSession,
    name: &str,
    world_pos: glam::Vec2,
) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Planet braucht einen Namen");
    }

    let system = session
        .system
        .as_mut()
        .context("Kein Planet hinzufügbar: kein System geöffnet")?;
    if system.find_planet(name).is_some() {
        bail!("Planet '{}' existiert bereits in {}", name, system.name);
    }

    let mut planet = Planet::new(name, world_pos);
    planet.radius = session.options.planet_radius_default;

    let system = Arc::make_mut(system);
    system.planets.push(planet);
    let entry = SelectionEntry::Planet(system.planets.len() - 1);
    log::info!(
        "Planet '{}' bei ({:.1}, {:.1}) angelegt",
        name,
        world_pos.x,
        world_pos.y
    );

    super::clear_selection(session);
    session.selection.insert(entry);

    session.schedule(SystemEffect::MarkDirty(entry));
    session.schedule(SystemEffect::RecomputePresence);
    session.schedule(SystemEffect::RecomputeSafeLanes);
    session.schedule(SystemEffect::SaveSystem);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StarSystem;

    fn session() -> EditorSession {
        let mut session = EditorSession::new();
        session.system = Some(Arc::new(StarSystem::new("S", 1000.0)));
        session
    }

    #[test]
    fn adds_and_selects_new_planet() {
        let mut session = session();
        session.selection.insert(SelectionEntry::JumpPoint(3));

        add_planet(&mut session, " Nova ", glam::Vec2::new(5.0, 6.0)).expect("anlegen");

        let system = session.system.as_deref().expect("System");
        assert_eq!(system.planets[0].name, "Nova");
        assert_eq!(system.planets[0].position, glam::Vec2::new(5.0, 6.0));
        assert_eq!(
            session.selection.iter().collect::<Vec<_>>(),
            vec![SelectionEntry::Planet(0)]
        );
        assert!(session
            .pending_effects
            .contains(&SystemEffect::RecomputePresence));
    }

    #[test]
    fn rejects_empty_and_duplicate_names() {
        let mut session = session();
        assert!(add_planet(&mut session, "  ", glam::Vec2::ZERO).is_err());
        add_planet(&mut session, "Nova", glam::Vec2::ZERO).expect("anlegen");
        assert!(add_planet(&mut session, "Nova", glam::Vec2::ZERO).is_err());
        assert_eq!(session.planet_count(), 1);
    }

    #[test]
    fn fails_without_open_system() {
        let mut session = EditorSession::new();
        assert!(add_planet(&mut session, "Nova", glam::Vec2::ZERO).is_err());
    }
}
