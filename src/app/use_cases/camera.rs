//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::EditorSession;
use crate::shared::options::CAMERA_FIT_MARGIN;

/// Zoomt die Kamera stufenweise hinein (Viewport-Mitte bleibt stabil).
pub fn zoom_in(session: &mut EditorSession) {
    let (min, max) = session.options.zoom_bounds();
    session
        .view
        .camera
        .zoom_by_clamped(session.options.camera_zoom_step, min, max);
}

/// Zoomt die Kamera stufenweise heraus (Viewport-Mitte bleibt stabil).
pub fn zoom_out(session: &mut EditorSession) {
    let (min, max) = session.options.zoom_bounds();
    session
        .view
        .camera
        .zoom_by_clamped(1.0 / session.options.camera_zoom_step, min, max);
}

/// Zentriert die Kamera auf den Systemursprung und passt den Systemradius ein.
///
/// Ohne System oder Viewport-Größe wird nur auf Zoom 1.0 (geklemmt) gesetzt.
pub fn fit_to_system(session: &mut EditorSession) {
    let (min, max) = session.options.zoom_bounds();
    let [width, height] = session.view.viewport_size;
    let radius = session.system.as_ref().map_or(0.0, |s| s.radius);

    let zoom = if radius > 0.0 && width > 0.0 && height > 0.0 {
        width.min(height) / (2.0 * radius * CAMERA_FIT_MARGIN)
    } else {
        1.0
    };

    session.view.camera.pan = glam::Vec2::ZERO;
    session.view.camera.zoom = zoom.clamp(min, max);

    log::info!(
        "Kamera eingepasst: Radius {:.0}, Zoom {:.4}",
        radius,
        session.view.camera.zoom
    );
}
