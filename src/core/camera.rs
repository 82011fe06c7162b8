//! 2D-Kamera für Pan und Zoom.
//!
//! Der Pan-Offset wird bereits mit dem Zoom multipliziert gespeichert
//! (Einheit: Pixel). Ein Zoomwechsel rechnet den Pan daher erst mit dem
//! alten Zoom zurück und danach mit dem neuen Zoom wieder hoch.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Pan-Offset in Pixeln (Welt-Koordinaten × Zoom)
    pub pan: Vec2,
    /// Zoom-Faktor (1.0 = eine Welteinheit pro Pixel)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine neue Kamera (Ursprung in der Viewport-Mitte, Zoom 1.0)
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Berechnet die Zoom-Grenzen `[step^min_exp, step^max_exp]`.
    pub fn zoom_bounds(step: f32, min_exponent: i32, max_exponent: i32) -> (f32, f32) {
        (step.powi(min_exponent), step.powi(max_exponent))
    }

    /// Verschiebt den Pan-Offset um ein Pixel-Delta.
    pub fn pan_by_pixels(&mut self, delta_px: Vec2) {
        self.pan += delta_px;
    }

    /// Ändert den Zoom um `factor` und hält dabei die Viewport-Mitte stabil.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        // Pan erst auf Welt-Einheiten zurückrechnen, dann neu skalieren
        let center_world = self.pan / self.zoom;
        self.zoom = (self.zoom * factor).clamp(min, max);
        self.pan = center_world * self.zoom;
    }

    /// Setzt den Zoom absolut (geklemmt), Viewport-Mitte bleibt stabil.
    pub fn set_zoom_clamped(&mut self, zoom: f32, min: f32, max: f32) {
        self.zoom_by_clamped(zoom / self.zoom, min, max);
    }

    /// Weltpunkt, der aktuell in der Viewport-Mitte liegt.
    pub fn center_world(&self) -> Vec2 {
        self.pan / self.zoom
    }

    /// Konvertiert Widget-lokale Koordinaten (y nach oben) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (screen_pos - screen_size * 0.5 + self.pan) / self.zoom
    }

    /// Konvertiert Welt-Koordinaten zu Widget-lokalen Koordinaten (y nach oben).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        world_pos * self.zoom - self.pan + screen_size * 0.5
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
