//! Planeten und Sprungpunkte als Sprites.

use super::culling::disc_intersects_rect;
use super::types::{RenderContext, SpriteKind};
use super::SystemRenderer;
use crate::core::{SelectionEntry, StarSystem};
use crate::shared::RenderScene;
use glam::Vec2;

/// Zeichnet alle sichtbaren Objekte; Planeten vor Sprungpunkten.
pub(super) fn draw_entities(
    ctx: &RenderContext<'_>,
    scene: &RenderScene,
    system: &StarSystem,
    renderer: &mut dyn SystemRenderer,
) {
    let (min, max) = ctx.visible_world_rect();

    for (index, planet) in system.planets.iter().enumerate() {
        if !disc_intersects_rect(planet.position, planet.radius, min, max) {
            continue;
        }
        draw_entity(
            ctx,
            renderer,
            SpriteKind::Planet,
            planet.position,
            planet.radius,
            scene.is_selected(SelectionEntry::Planet(index)),
            &planet.name,
        );
    }

    let jump_radius = ctx.options.jump_point_radius_world;
    for (index, jump) in system.jumps.iter().enumerate() {
        if !disc_intersects_rect(jump.position, jump_radius, min, max) {
            continue;
        }
        draw_entity(
            ctx,
            renderer,
            SpriteKind::JumpPoint,
            jump.position,
            jump_radius,
            scene.is_selected(SelectionEntry::JumpPoint(index)),
            &jump.target,
        );
    }
}

fn draw_entity(
    ctx: &RenderContext<'_>,
    renderer: &mut dyn SystemRenderer,
    sprite: SpriteKind,
    position: Vec2,
    radius: f32,
    selected: bool,
    caption: &str,
) {
    let caption = (!caption.is_empty()).then_some(caption);
    renderer.draw_sprite(
        sprite,
        ctx.to_screen(position),
        radius * ctx.camera.zoom,
        selected,
        caption,
    );
}
