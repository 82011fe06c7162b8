//! Viewport-Culling für Sprites und Kreise.

use glam::Vec2;

/// Prüft ob ein Punkt innerhalb eines AABB-Rechtecks liegt (inklusiv).
pub(super) fn point_in_rect(point: Vec2, min: Vec2, max: Vec2) -> bool {
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// Prüft ob eine Kreisscheibe ein AABB-Rechteck berührt.
pub(super) fn disc_intersects_rect(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> bool {
    let nearest = center.clamp(min, max);
    nearest.distance_squared(center) <= radius * radius
}

/// Prüft ob die Kreislinie (nicht die Fläche) ein AABB-Rechteck schneidet.
///
/// Liegt das Rechteck vollständig innerhalb des Kreises, ist nichts zu zeichnen.
pub(super) fn circle_outline_intersects_rect(
    center: Vec2,
    radius: f32,
    min: Vec2,
    max: Vec2,
) -> bool {
    if !disc_intersects_rect(center, radius, min, max) {
        return false;
    }
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ];
    let r2 = radius * radius;
    !corners.iter().all(|c| c.distance_squared(center) < r2)
}
