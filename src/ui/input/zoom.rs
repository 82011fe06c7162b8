//! Scroll-Zoom in Stufen.

use super::InputState;
use crate::app::AppIntent;
use crate::shared::EditorOptions;

impl InputState {
    /// Mausrad über dem Viewport zoomt um einen Schritt (Viewport-Mitte bleibt stabil).
    pub(crate) fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        options: &EditorOptions,
        events: &mut Vec<AppIntent>,
    ) {
        if !options.scroll_zoom_enabled || !response.hovered() {
            return;
        }

        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll > 0.0 {
            events.push(AppIntent::ZoomInRequested);
        } else if scroll < 0.0 {
            events.push(AppIntent::ZoomOutRequested);
        }
    }
}
