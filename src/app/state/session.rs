use crate::app::hooks::SystemEffect;
use crate::app::CommandLog;
use crate::core::StarSystem;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{GestureState, SelectionState, UiState, ViewState};

/// Gesamter Zustand einer Editor-Sitzung.
///
/// Wird jedem Handler per Referenz übergeben; mehrere Sitzungen können
/// unabhängig voneinander existieren.
pub struct EditorSession {
    /// Aktuell bearbeitetes System (None = Editor geschlossen)
    pub system: Option<Arc<StarSystem>>,
    pub view: ViewState,
    pub selection: SelectionState,
    pub gesture: GestureState,
    pub ui: UiState,
    /// Laufzeit-Optionen (Zoom, Schwellen, Farben)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Noch nicht an die Hooks weitergeleitete Aufträge
    pub pending_effects: Vec<SystemEffect>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl EditorSession {
    /// Erstellt eine neue Sitzung ohne geöffnetes System
    pub fn new() -> Self {
        Self {
            system: None,
            view: ViewState::new(),
            selection: SelectionState::new(),
            gesture: GestureState::default(),
            ui: UiState::new(),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            pending_effects: Vec::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Planeten zurück (für UI-Anzeige)
    pub fn planet_count(&self) -> usize {
        self.system.as_ref().map_or(0, |s| s.planet_count())
    }

    /// Gibt die Anzahl der Sprungpunkte zurück (für UI-Anzeige)
    pub fn jump_count(&self) -> usize {
        self.system.as_ref().map_or(0, |s| s.jump_count())
    }

    /// Merkt einen Auftrag für die Hooks vor (ohne Duplikate).
    pub fn schedule(&mut self, effect: SystemEffect) {
        if !self.pending_effects.contains(&effect) {
            self.pending_effects.push(effect);
        }
    }

    /// Entnimmt alle vorgemerkten Aufträge.
    pub fn take_effects(&mut self) -> Vec<SystemEffect> {
        std::mem::take(&mut self.pending_effects)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
