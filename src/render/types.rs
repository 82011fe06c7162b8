//! Rendering-Typen und gemeinsamer Frame-Kontext.

use crate::core::Camera2D;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Art des zu zeichnenden Sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Planet,
    JumpPoint,
}

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die View-Parameter, die jeder Sub-Renderer pro Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// Kamera (Pan + Zoom)
    pub camera: &'a Camera2D,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: Vec2,
    /// Editor-Optionen (Farben, Größen, etc.)
    pub options: &'a EditorOptions,
}

impl RenderContext<'_> {
    /// Welt → Widget-lokale Pixel (y nach oben).
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        self.camera.world_to_screen(world, self.viewport_size)
    }

    /// Sichtbarer Weltausschnitt als `(min, max)`.
    pub fn visible_world_rect(&self) -> (Vec2, Vec2) {
        let a = self.camera.screen_to_world(Vec2::ZERO, self.viewport_size);
        let b = self
            .camera
            .screen_to_world(self.viewport_size, self.viewport_size);
        (a.min(b), a.max(b))
    }
}
