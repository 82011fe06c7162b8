use crate::core::SelectionEntry;
use glam::Vec2;

/// Modus der aktiven Zeigergeste im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    Idle,
    /// Drücken auf leere Fläche: Ansicht verschieben
    PanningViewport,
    /// Drücken auf ein Objekt: Selektion verschieben
    DraggingSelection,
}

/// Selektionsänderung, die erst beim Loslassen entschieden wird.
///
/// Wird die Geste als Klick eingestuft, wird sie angewendet, sonst verworfen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingClick {
    #[default]
    None,
    /// Klick auf ein bereits selektiertes Objekt: Selektion auf dieses reduzieren
    PendingAdd(SelectionEntry),
    /// Additiver Klick auf ein bereits selektiertes Objekt: abwählen
    PendingRemoveIfClick(SelectionEntry),
}

/// Letztes Drücken auf ein Objekt (für Doppelklick-Erkennung).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressRecord {
    pub entry: SelectionEntry,
    /// Zeitstempel in Sekunden
    pub time: f64,
}

/// Zustand der Klick-/Drag-Erkennung
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    pub mode: DragMode,
    /// Zeitstempel des letzten Drückens in Sekunden
    pub press_time: f64,
    /// Aufsummierte Bewegung seit dem letzten Drücken in Pixeln
    pub moved_px: f32,
    /// Drag hat die Schwellen überschritten und verschiebt Objekte
    pub committed: bool,
    /// Bewegung vor dem Überschreiten der Schwellen (Pixel, y nach oben)
    pub uncommitted_delta_px: Vec2,
    pub pending: PendingClick,
    pub last_press: Option<PressRecord>,
}

impl GestureState {
    /// Beginnt eine neue Geste.
    pub fn begin(&mut self, mode: DragMode, time: f64) {
        self.mode = mode;
        self.press_time = time;
        self.moved_px = 0.0;
        self.committed = false;
        self.uncommitted_delta_px = Vec2::ZERO;
        self.pending = PendingClick::None;
    }

    /// Beendet die Geste und verwirft offene Klick-Entscheidungen.
    pub fn reset(&mut self) {
        self.mode = DragMode::Idle;
        self.committed = false;
        self.uncommitted_delta_px = Vec2::ZERO;
        self.pending = PendingClick::None;
    }

    /// Vergangene Zeit seit dem Drücken in Millisekunden.
    pub fn elapsed_ms(&self, now: f64) -> f64 {
        (now - self.press_time) * 1000.0
    }
}
