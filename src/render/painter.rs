//! `SystemRenderer` auf Basis des egui-Painters.

use super::{SpriteKind, SystemRenderer};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Breite der Hervorhebung um selektierte Objekte in Pixeln.
const SELECTION_RING_WIDTH: f32 = 2.0;
/// Mindestradius, damit weit herausgezoomte Objekte sichtbar bleiben.
const MIN_SPRITE_RADIUS_PX: f32 = 3.0;

/// Zeichnet in ein egui-Rechteck und dreht dabei die y-Achse um.
pub struct EguiPainterRenderer<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    options: &'a EditorOptions,
}

impl<'a> EguiPainterRenderer<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, options: &'a EditorOptions) -> Self {
        Self {
            painter,
            rect,
            options,
        }
    }

    /// Widget-lokal (y nach oben) → egui-Bildschirmposition (y nach unten).
    fn to_pos(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.rect.left() + p.x, self.rect.bottom() - p.y)
    }
}

impl SystemRenderer for EguiPainterRenderer<'_> {
    fn draw_sprite(
        &mut self,
        sprite: SpriteKind,
        screen_pos: Vec2,
        radius_px: f32,
        selected: bool,
        caption: Option<&str>,
    ) {
        let center = self.to_pos(screen_pos);
        let radius = radius_px.max(MIN_SPRITE_RADIUS_PX);
        let fill = match sprite {
            SpriteKind::Planet => color32(self.options.planet_color),
            SpriteKind::JumpPoint => color32(self.options.jump_point_color),
        };

        match sprite {
            SpriteKind::Planet => {
                self.painter.circle_filled(center, radius, fill);
            }
            SpriteKind::JumpPoint => {
                self.painter
                    .circle_stroke(center, radius, egui::Stroke::new(2.0, fill));
                self.painter.circle_filled(center, radius * 0.3, fill);
            }
        }

        if selected {
            self.painter.circle_stroke(
                center,
                radius + SELECTION_RING_WIDTH * 2.0,
                egui::Stroke::new(SELECTION_RING_WIDTH, color32(self.options.selection_color)),
            );
        }

        if let Some(caption) = caption {
            self.painter.text(
                center + egui::vec2(0.0, radius + 4.0),
                egui::Align2::CENTER_TOP,
                caption,
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
        }
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: [f32; 4]) {
        self.painter.line_segment(
            [self.to_pos(from), self.to_pos(to)],
            egui::Stroke::new(1.0, color32(color)),
        );
    }

    fn draw_circle(&mut self, center: Vec2, radius_px: f32, color: [f32; 4]) {
        self.painter.circle_stroke(
            self.to_pos(center),
            radius_px,
            egui::Stroke::new(1.0, color32(color)),
        );
    }
}

fn color32(c: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(channel(c[0]), channel(c[1]), channel(c[2]), channel(c[3]))
}
