//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Camera2D, SelectionEntry, StarSystem};
use indexmap::IndexSet;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Das bearbeitete System (None = Editor geschlossen)
    pub system: Option<Arc<StarSystem>>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Aktuell selektierte Objekte (Arc für O(1)-Clone pro Frame)
    pub selection: Arc<IndexSet<SelectionEntry>>,
    /// Gitter zeichnen
    pub show_grid: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein System für Rendering vorhanden ist.
    pub fn has_system(&self) -> bool {
        self.system.is_some()
    }

    /// Gibt zurück, ob ein Eintrag selektiert ist.
    pub fn is_selected(&self, entry: SelectionEntry) -> bool {
        self.selection.contains(&entry)
    }
}
