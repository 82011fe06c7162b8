//! Zeiger-Rohereignisse: Drücken, Bewegen, Loslassen, Fokusverlust.

use super::{to_widget_local, InputState};
use crate::app::AppIntent;
use glam::Vec2;

/// Zeigerzustand eines Frames, losgelöst von egui.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct PointerSnapshot {
    /// Primärtaste in diesem Frame über dem Viewport gedrückt (Widget-lokal, y nach oben)
    pub pressed_at: Option<Vec2>,
    /// Zeigerbewegung in Pixeln (y nach oben)
    pub delta_px: Vec2,
    pub released: bool,
    /// Fenster hat den Eingabefokus
    pub focused: bool,
    /// Strg/Cmd oder Shift gehalten
    pub additive: bool,
    /// egui-Eingabezeit in Sekunden
    pub time: f64,
}

impl PointerSnapshot {
    /// Liest den Zeigerzustand aus egui.
    pub(crate) fn capture(ui: &egui::Ui, response: &egui::Response) -> Self {
        let rect = response.rect;
        ui.input(|i| {
            let pressed_at = if i.pointer.primary_pressed() {
                i.pointer
                    .press_origin()
                    .filter(|pos| rect.contains(*pos) && response.hovered())
                    .map(|pos| to_widget_local(pos, rect))
            } else {
                None
            };
            let delta = i.pointer.delta();
            Self {
                pressed_at,
                delta_px: Vec2::new(delta.x, -delta.y),
                released: i.pointer.primary_released(),
                focused: i.focused,
                additive: i.modifiers.command || i.modifiers.shift,
                time: i.time,
            }
        })
    }
}

impl InputState {
    /// Übersetzt einen Zeiger-Snapshot in Gesten-Intents.
    pub(crate) fn handle_pointer(&mut self, pointer: &PointerSnapshot, events: &mut Vec<AppIntent>) {
        if self.primary_down && !pointer.focused {
            self.primary_down = false;
            events.push(AppIntent::FocusLost);
            return;
        }

        if let Some(screen_pos) = pointer.pressed_at {
            self.primary_down = true;
            events.push(AppIntent::PointerPressed {
                screen_pos,
                additive: pointer.additive,
                time: pointer.time,
            });
        }

        if !self.primary_down {
            return;
        }

        if pointer.delta_px != Vec2::ZERO {
            events.push(AppIntent::PointerMoved {
                delta_px: pointer.delta_px,
                time: pointer.time,
            });
        }

        if pointer.released {
            self.primary_down = false;
            events.push(AppIntent::PointerReleased { time: pointer.time });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> PointerSnapshot {
        PointerSnapshot {
            focused: true,
            ..Default::default()
        }
    }

    #[test]
    fn press_move_release_sequence() {
        let mut input = InputState::new();
        let mut events = Vec::new();

        input.handle_pointer(
            &PointerSnapshot {
                pressed_at: Some(Vec2::new(500.0, 400.0)),
                time: 1.0,
                ..snapshot()
            },
            &mut events,
        );
        input.handle_pointer(
            &PointerSnapshot {
                delta_px: Vec2::new(5.0, -2.0),
                time: 1.1,
                ..snapshot()
            },
            &mut events,
        );
        input.handle_pointer(
            &PointerSnapshot {
                released: true,
                time: 1.2,
                ..snapshot()
            },
            &mut events,
        );

        assert_eq!(events.len(), 3);
        assert!(matches!(
            events[0],
            AppIntent::PointerPressed { additive: false, .. }
        ));
        assert!(matches!(events[1], AppIntent::PointerMoved { .. }));
        assert!(matches!(events[2], AppIntent::PointerReleased { .. }));
        assert!(!input.primary_down);
    }

    #[test]
    fn movement_without_press_is_ignored() {
        let mut input = InputState::new();
        let mut events = Vec::new();

        input.handle_pointer(
            &PointerSnapshot {
                delta_px: Vec2::new(3.0, 3.0),
                released: true,
                ..snapshot()
            },
            &mut events,
        );

        assert!(events.is_empty());
    }

    #[test]
    fn focus_loss_during_press_cancels() {
        let mut input = InputState::new();
        let mut events = Vec::new();
        input.handle_pointer(
            &PointerSnapshot {
                pressed_at: Some(Vec2::ZERO),
                ..snapshot()
            },
            &mut events,
        );

        input.handle_pointer(
            &PointerSnapshot {
                focused: false,
                released: true,
                ..Default::default()
            },
            &mut events,
        );

        assert!(matches!(events.last(), Some(AppIntent::FocusLost)));
        assert!(!input.primary_down);
    }
}
