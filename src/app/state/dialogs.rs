use crate::core::{JumpPoint, Planet, SelectionEntry, StarSystem};

/// Arbeitskopie im Eigenschaften-Editor.
///
/// Änderungen landen erst beim Übernehmen im System.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyDraft {
    Planet { index: usize, draft: Planet },
    JumpPoint { index: usize, draft: JumpPoint },
}

impl PropertyDraft {
    /// Erstellt eine Arbeitskopie des referenzierten Objekts.
    pub fn from_entry(system: &StarSystem, entry: SelectionEntry) -> Option<Self> {
        match entry {
            SelectionEntry::Planet(index) => system.planets.get(index).map(|p| Self::Planet {
                index,
                draft: p.clone(),
            }),
            SelectionEntry::JumpPoint(index) => {
                system.jumps.get(index).map(|j| Self::JumpPoint {
                    index,
                    draft: j.clone(),
                })
            }
        }
    }

    /// Das bearbeitete Objekt als Selektions-Eintrag.
    pub fn entry(&self) -> SelectionEntry {
        match self {
            Self::Planet { index, .. } => SelectionEntry::Planet(*index),
            Self::JumpPoint { index, .. } => SelectionEntry::JumpPoint(*index),
        }
    }
}

/// UI-bezogener Sitzungszustand
#[derive(Debug, Clone)]
pub struct UiState {
    /// Offener Eigenschaften-Editor (None = geschlossen)
    pub property_editor: Option<PropertyDraft>,
    /// Eingabefeld für den Namen eines neuen Planeten
    pub new_planet_name: String,
    /// Eingabefeld für eine neue Tech-Gruppe im Eigenschaften-Editor
    pub tech_input: String,
    /// Eingabefeld für den Skalierungsfaktor
    pub scale_factor_input: f32,
    /// Letzte Fehlermeldung für die Status-Bar
    pub status_message: Option<String>,
    /// Optionen-Dialog sichtbar
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            property_editor: None,
            new_planet_name: String::new(),
            tech_input: String::new(),
            scale_factor_input: 1.0,
            status_message: None,
            show_options_dialog: false,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
