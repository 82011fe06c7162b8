//! Viewport-Input-Handling: Maus-Events, Fokus, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `pointer`: Drücken, Bewegen, Loslassen, Fokusverlust
//! - `zoom`: Scroll-Zoom
//!
//! Ob eine Geste Klick oder Drag ist, entscheidet der Controller; hier werden
//! nur Rohereignisse in Widget-lokale Koordinaten (y nach oben) übersetzt.

mod pointer;
mod zoom;

use super::keyboard;
use crate::app::AppIntent;
use crate::shared::EditorOptions;
use glam::Vec2;

pub(crate) use pointer::PointerSnapshot;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Debug, Default)]
pub struct InputState {
    /// Ein Drücken wurde an den Controller gemeldet, Loslassen steht aus
    pub(crate) primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_down: false,
        }
    }

    /// Gibt `true` zurück, solange eine gemeldete Geste nicht beendet ist.
    pub fn is_pointer_down(&self) -> bool {
        self.primary_down
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        has_selection: bool,
        property_editor_open: bool,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let viewport_size = [response.rect.width(), response.rect.height()];
        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            has_selection,
            property_editor_open,
        ));

        let snapshot = PointerSnapshot::capture(ui, response);
        self.handle_pointer(&snapshot, &mut events);

        self.handle_scroll_zoom(ui, response, options, &mut events);

        events
    }
}

/// Rechnet eine egui-Bildschirmposition in Widget-lokale Pixel (y nach oben) um.
pub(crate) fn to_widget_local(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    let local = pos - rect.min;
    Vec2::new(local.x, rect.height() - local.y)
}
