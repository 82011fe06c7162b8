//! Selektions-Eintrag: verweist per Index auf einen Planeten oder Sprungpunkt.

use super::StarSystem;
use glam::Vec2;

/// Ein selektierbares Objekt im System.
///
/// Die eigentlichen Daten liegen im `StarSystem`, hier steht nur der Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionEntry {
    Planet(usize),
    JumpPoint(usize),
}

impl SelectionEntry {
    /// Weltposition des referenzierten Objekts (None bei veraltetem Index).
    pub fn position(self, system: &StarSystem) -> Option<Vec2> {
        match self {
            SelectionEntry::Planet(index) => system.planets.get(index).map(|p| p.position),
            SelectionEntry::JumpPoint(index) => system.jumps.get(index).map(|j| j.position),
        }
    }

    /// Anzeigename des Objekts.
    pub fn label(self, system: &StarSystem) -> Option<&str> {
        match self {
            SelectionEntry::Planet(index) => system.planets.get(index).map(|p| p.name.as_str()),
            SelectionEntry::JumpPoint(index) => {
                system.jumps.get(index).map(|j| j.target.as_str())
            }
        }
    }

    /// Gibt `true` zurück, wenn der Index im System existiert.
    pub fn exists_in(self, system: &StarSystem) -> bool {
        self.position(system).is_some()
    }
}
