//! Rendering der Editor-Szene über eine austauschbare Zeichen-Schnittstelle.
//!
//! `draw_scene` rechnet alle Positionen in Widget-lokale Pixel (y nach oben)
//! um; die Implementierung von `SystemRenderer` zeichnet nur noch.

mod culling;
mod entity_renderer;
mod grid_renderer;
mod painter;
mod types;

pub use crate::shared::RenderScene;
pub use painter::EguiPainterRenderer;
pub use types::SpriteKind;
use types::RenderContext;

use glam::Vec2;

/// Zeichen-Backend für die Editor-Szene.
///
/// Alle Koordinaten sind Widget-lokale Pixel mit y nach oben.
pub trait SystemRenderer {
    /// Zeichnet ein Objekt; `selected` erfordert einen Hervorhebungsring.
    fn draw_sprite(
        &mut self,
        sprite: SpriteKind,
        screen_pos: Vec2,
        radius_px: f32,
        selected: bool,
        caption: Option<&str>,
    );
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: [f32; 4]);
    fn draw_circle(&mut self, center: Vec2, radius_px: f32, color: [f32; 4]);
}

/// Rendert die komplette Szene.
///
/// Diese Funktion nimmt nur Referenzen, keine Daten werden kopiert.
pub fn draw_scene(scene: &RenderScene, renderer: &mut dyn SystemRenderer) {
    let Some(system) = scene.system.as_deref() else {
        return;
    };
    let [width, height] = scene.viewport_size;
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    let ctx = RenderContext {
        camera: &scene.camera,
        viewport_size: Vec2::new(width, height),
        options: &scene.options,
    };

    if scene.show_grid {
        grid_renderer::draw_grid(&ctx, renderer);
    }
    grid_renderer::draw_system_radius(&ctx, system.radius, renderer);
    entity_renderer::draw_entities(&ctx, scene, system, renderer);
}
