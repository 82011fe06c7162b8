//! Anbindung an Persistenz und abgeleiteten Weltzustand.
//!
//! Use-Cases legen `SystemEffect`s in der Sitzung ab, der Controller leitet
//! sie nach jedem Intent an die `SystemHooks` des Hosts weiter.

use crate::core::{SelectionEntry, StarSystem};

/// Auftrag an die umgebende Spiel-Infrastruktur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemEffect {
    /// Objekt wurde geändert und muss gespeichert werden
    MarkDirty(SelectionEntry),
    /// System jetzt speichern
    SaveSystem,
    /// Geometrie automatisch positionierter Sprungpunkte neu berechnen
    RecomputeJumpGeometry,
    /// Wirtschaftliche Fraktions-Präsenz neu berechnen
    RecomputePresence,
    /// Sichere Routen neu berechnen
    RecomputeSafeLanes,
}

/// Externe Dienste, die der Editor nach Änderungen aufruft.
pub trait SystemHooks {
    fn mark_dirty(&mut self, system: &StarSystem, entry: SelectionEntry);
    fn save_system(&mut self, system: &StarSystem);
    /// Darf Positionen von Sprungpunkten mit `auto_position` anpassen.
    fn recompute_jump_geometry(&mut self, system: &mut StarSystem);
    fn recompute_presence(&mut self, system: &StarSystem);
    fn recompute_safe_lanes(&mut self, system: &StarSystem);
}

/// Standard-Hooks: protokollieren nur.
#[derive(Debug, Default)]
pub struct LoggingHooks;

impl SystemHooks for LoggingHooks {
    fn mark_dirty(&mut self, system: &StarSystem, entry: SelectionEntry) {
        log::debug!(
            "{}: {:?} ({}) als geändert markiert",
            system.name,
            entry,
            entry.label(system).unwrap_or("?")
        );
    }

    fn save_system(&mut self, system: &StarSystem) {
        log::info!("System '{}' zum Speichern vorgemerkt", system.name);
    }

    fn recompute_jump_geometry(&mut self, system: &mut StarSystem) {
        log::debug!("{}: Sprungpunkt-Geometrie neu berechnen", system.name);
    }

    fn recompute_presence(&mut self, system: &StarSystem) {
        log::debug!("{}: Präsenz neu berechnen", system.name);
    }

    fn recompute_safe_lanes(&mut self, system: &StarSystem) {
        log::debug!("{}: sichere Routen neu berechnen", system.name);
    }
}
