//! Gitterlinien und Systemradius.

use super::culling::circle_outline_intersects_rect;
use super::types::RenderContext;
use super::SystemRenderer;
use glam::Vec2;

/// Unterhalb dieses Pixelabstands wird das Gitter ausgeblendet.
const MIN_GRID_SPACING_PX: f32 = 8.0;

/// Zeichnet die Gitterlinien im sichtbaren Weltausschnitt.
pub(super) fn draw_grid(ctx: &RenderContext<'_>, renderer: &mut dyn SystemRenderer) {
    let spacing = ctx.options.grid_spacing_world;
    if spacing <= 0.0 || spacing * ctx.camera.zoom < MIN_GRID_SPACING_PX {
        return;
    }

    let (min, max) = ctx.visible_world_rect();
    let color = ctx.options.grid_color;

    let first_x = (min.x / spacing).ceil() as i64;
    let last_x = (max.x / spacing).floor() as i64;
    for k in first_x..=last_x {
        let x = k as f32 * spacing;
        renderer.draw_line(
            ctx.to_screen(Vec2::new(x, min.y)),
            ctx.to_screen(Vec2::new(x, max.y)),
            color,
        );
    }

    let first_y = (min.y / spacing).ceil() as i64;
    let last_y = (max.y / spacing).floor() as i64;
    for k in first_y..=last_y {
        let y = k as f32 * spacing;
        renderer.draw_line(
            ctx.to_screen(Vec2::new(min.x, y)),
            ctx.to_screen(Vec2::new(max.x, y)),
            color,
        );
    }
}

/// Zeichnet den Systemradius als Kreis um den Ursprung.
pub(super) fn draw_system_radius(
    ctx: &RenderContext<'_>,
    radius: f32,
    renderer: &mut dyn SystemRenderer,
) {
    if radius <= 0.0 {
        return;
    }
    let (min, max) = ctx.visible_world_rect();
    if !circle_outline_intersects_rect(Vec2::ZERO, radius, min, max) {
        return;
    }
    renderer.draw_circle(
        ctx.to_screen(Vec2::ZERO),
        radius * ctx.camera.zoom,
        ctx.options.grid_color,
    );
}
