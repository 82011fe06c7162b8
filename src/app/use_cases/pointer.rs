//! Use-Case: Zeigergesten im Viewport (Klick, Doppelklick, Pan, Verschieben).
//!
//! Zustandsfolge: `Idle → {PanningViewport | DraggingSelection} → Idle`.
//! Ob eine Geste ein Klick oder ein Drag war, entscheidet sich über die
//! Zeit- und Bewegungsschwellen aus den Optionen.

use super::{properties, selection};
use crate::app::hooks::SystemEffect;
use crate::app::state::{DragMode, PressRecord};
use crate::app::EditorSession;
use crate::core::SelectionEntry;
use glam::Vec2;

/// Primäre Taste gedrückt: Hit-Test, Selektion und Gestenmodus bestimmen.
pub fn begin_gesture(session: &mut EditorSession, screen_pos: Vec2, additive: bool, time: f64) {
    let Some(system) = session.system.as_deref() else {
        return;
    };

    let pointer_world = session
        .view
        .camera
        .screen_to_world(screen_pos, session.view.viewport_vec());
    let hit = selection::hit_test(
        system,
        &session.view.camera,
        session.options.jump_point_radius_world,
        pointer_world,
    );

    let Some(entry) = hit else {
        if !additive {
            session.selection.clear();
        }
        session.gesture.begin(DragMode::PanningViewport, time);
        session.gesture.last_press = None;
        log::debug!("Geste: Pan ab {:?}", pointer_world);
        return;
    };

    // Additiv bleibt es beim verzögerten Abwählen, auch bei schnellem Klicken
    if !additive && session.selection.contains(entry) && is_double_click(session, entry, time) {
        session.gesture.reset();
        session.gesture.last_press = None;
        if let Err(e) = properties::open_property_editor(session, entry) {
            log::error!("Eigenschaften-Editor konnte nicht geöffnet werden: {:#}", e);
        }
        return;
    }

    session.gesture.begin(DragMode::DraggingSelection, time);
    session.gesture.pending = selection::toggle(&mut session.selection, entry, additive);
    session.gesture.last_press = Some(PressRecord { entry, time });
    log::debug!("Geste: {:?} gedrückt (additiv: {})", entry, additive);
}

/// Zeiger bewegt (Pixel-Delta, y nach oben).
pub fn update_gesture(session: &mut EditorSession, delta_px: Vec2, time: f64) {
    match session.gesture.mode {
        DragMode::Idle => {}
        DragMode::PanningViewport => {
            // Inhalt folgt dem Zeiger
            session.view.camera.pan_by_pixels(-delta_px);
            session.gesture.moved_px += delta_px.length();
        }
        DragMode::DraggingSelection => {
            session.gesture.moved_px += delta_px.length();

            if session.gesture.committed {
                let delta_world = delta_px * session.view.camera.world_per_pixel();
                selection::move_selected_entities(session, delta_world);
                return;
            }

            session.gesture.uncommitted_delta_px += delta_px;
            if exceeds_click_thresholds(session, time) {
                commit_drag(session);
            }
        }
    }
}

/// Primäre Taste losgelassen: Klick anwenden oder Drag abschließen.
pub fn end_gesture(session: &mut EditorSession, time: f64) {
    match session.gesture.mode {
        DragMode::Idle => return,
        DragMode::PanningViewport => {}
        DragMode::DraggingSelection => {
            if session.gesture.committed {
                schedule_moved_entities(session);
            } else if !exceeds_click_thresholds(session, time) {
                let pending = session.gesture.pending;
                selection::resolve_click(&mut session.selection, pending);
            }
        }
    }

    session.gesture.reset();
}

/// Fokusverlust: Geste sofort beenden, bereits angewendete Verschiebungen bleiben.
pub fn cancel_gesture(session: &mut EditorSession) {
    if session.gesture.mode == DragMode::Idle {
        return;
    }
    log::debug!("Geste abgebrochen ({:?})", session.gesture.mode);
    if session.gesture.committed {
        schedule_moved_entities(session);
    }
    session.gesture.reset();
}

fn is_double_click(session: &EditorSession, entry: SelectionEntry, time: f64) -> bool {
    let gesture = &session.gesture;
    gesture.last_press.is_some_and(|previous| {
        previous.entry == entry
            && (time - previous.time) * 1000.0 < session.options.click_time_threshold_ms
            && gesture.moved_px < session.options.click_move_threshold_px
    })
}

fn exceeds_click_thresholds(session: &EditorSession, time: f64) -> bool {
    session.gesture.moved_px >= session.options.click_move_threshold_px
        || session.gesture.elapsed_ms(time) >= session.options.click_time_threshold_ms
}

/// Drag wird verbindlich: Sprungpunkte verlieren `auto_position`, die bisher
/// aufgelaufene Bewegung wird nachgeholt.
fn commit_drag(session: &mut EditorSession) {
    session.gesture.committed = true;
    selection::clear_auto_position_of_selected(session);

    let backlog = std::mem::take(&mut session.gesture.uncommitted_delta_px);
    let delta_world = backlog * session.view.camera.world_per_pixel();
    selection::move_selected_entities(session, delta_world);
    log::debug!("Drag übernommen für {} Objekte", session.selection.len());
}

fn schedule_moved_entities(session: &mut EditorSession) {
    let moved: Vec<SelectionEntry> = session.selection.iter().collect();
    for entry in moved {
        session.schedule(SystemEffect::MarkDirty(entry));
    }
    session.schedule(SystemEffect::RecomputeJumpGeometry);
    session.schedule(SystemEffect::RecomputeSafeLanes);
    session.schedule(SystemEffect::SaveSystem);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PendingClick;
    use crate::core::{JumpPoint, Planet, StarSystem};
    use approx::assert_relative_eq;
    use std::sync::Arc;

    /// Viewport 800×600, Zoom 1, Pan 0: Welt (x, y) liegt bei Screen (x + 400, y + 300).
    fn session() -> EditorSession {
        let mut system = StarSystem::new("Test", 5000.0);
        system.planets.push(Planet::new("A", Vec2::new(100.0, 100.0)));
        system.planets.push(Planet::new("B", Vec2::new(-200.0, 0.0)));
        system.jumps.push(JumpPoint::new("J", Vec2::new(0.0, -200.0)));

        let mut session = EditorSession::new();
        session.system = Some(Arc::new(system));
        session.view.viewport_size = [800.0, 600.0];
        session
    }

    fn screen_of(world: Vec2) -> Vec2 {
        world + Vec2::new(400.0, 300.0)
    }

    fn system(session: &EditorSession) -> &StarSystem {
        session.system.as_deref().expect("System vorhanden")
    }

    #[test]
    fn press_on_empty_space_pans_and_clears() {
        let mut session = session();
        session.selection.insert(SelectionEntry::Planet(0));

        begin_gesture(&mut session, screen_of(Vec2::new(1000.0, 1000.0)), false, 0.0);

        assert_eq!(session.gesture.mode, DragMode::PanningViewport);
        assert!(session.selection.is_empty());
    }

    #[test]
    fn panning_keeps_grabbed_world_point_under_pointer() {
        let mut session = session();
        let size = session.view.viewport_vec();
        let start = Vec2::new(50.0, 60.0);
        let grabbed = session.view.camera.screen_to_world(start, size);

        begin_gesture(&mut session, start, false, 0.0);
        update_gesture(&mut session, Vec2::new(30.0, -20.0), 0.1);
        end_gesture(&mut session, 0.2);

        let now = session
            .view
            .camera
            .screen_to_world(start + Vec2::new(30.0, -20.0), size);
        assert_relative_eq!(now.x, grabbed.x, epsilon = 1e-4);
        assert_relative_eq!(now.y, grabbed.y, epsilon = 1e-4);
        assert_eq!(session.gesture.mode, DragMode::Idle);
    }

    #[test]
    fn small_moves_do_not_reposition_until_threshold() {
        let mut session = session();
        begin_gesture(&mut session, screen_of(Vec2::new(100.0, 100.0)), false, 0.0);

        update_gesture(&mut session, Vec2::new(3.0, 0.0), 0.01);
        assert_eq!(system(&session).planets[0].position, Vec2::new(100.0, 100.0));

        update_gesture(&mut session, Vec2::new(9.0, 0.0), 0.02);
        assert!(session.gesture.committed);
        assert_eq!(system(&session).planets[0].position, Vec2::new(112.0, 100.0));
    }

    #[test]
    fn drag_scales_delta_by_zoom() {
        let mut session = session();
        session.view.camera.zoom = 0.5;
        let start = session
            .view
            .camera
            .world_to_screen(Vec2::new(100.0, 100.0), session.view.viewport_vec());

        begin_gesture(&mut session, start, false, 0.0);
        update_gesture(&mut session, Vec2::new(50.0, 0.0), 0.05);
        end_gesture(&mut session, 0.1);

        assert_eq!(system(&session).planets[0].position, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn long_press_commits_drag_without_movement() {
        let mut session = session();
        begin_gesture(&mut session, screen_of(Vec2::new(0.0, -200.0)), false, 0.0);
        update_gesture(&mut session, Vec2::ZERO, 0.5);

        assert!(session.gesture.committed);
        assert!(!system(&session).jumps[0].auto_position);
    }

    #[test]
    fn release_after_threshold_time_is_not_a_click() {
        let mut session = session();
        session.selection.insert(SelectionEntry::Planet(0));
        session.selection.insert(SelectionEntry::Planet(1));

        begin_gesture(&mut session, screen_of(Vec2::new(100.0, 100.0)), true, 0.0);
        end_gesture(&mut session, 1.0);

        assert_eq!(session.selection.len(), 2);
        assert!(session.pending_effects.is_empty());
    }

    #[test]
    fn double_click_opens_property_editor() {
        let mut session = session();
        let pos = screen_of(Vec2::new(-200.0, 0.0));

        begin_gesture(&mut session, pos, false, 0.0);
        end_gesture(&mut session, 0.05);
        begin_gesture(&mut session, pos, false, 0.2);

        let editor = session.ui.property_editor.as_ref().expect("Editor offen");
        assert_eq!(editor.entry(), SelectionEntry::Planet(1));
        assert_eq!(session.gesture.mode, DragMode::Idle);
    }

    #[test]
    fn quick_additive_reclick_deselects_instead_of_editing() {
        let mut session = session();
        session.selection.insert(SelectionEntry::Planet(1));
        let pos = screen_of(Vec2::new(100.0, 100.0));

        begin_gesture(&mut session, pos, true, 0.0);
        end_gesture(&mut session, 0.0);
        assert!(session.selection.contains(SelectionEntry::Planet(0)));

        begin_gesture(&mut session, pos, true, 0.1);
        end_gesture(&mut session, 0.15);

        assert!(session.ui.property_editor.is_none());
        assert!(!session.selection.contains(SelectionEntry::Planet(0)));
        assert!(session.selection.contains(SelectionEntry::Planet(1)));
    }

    #[test]
    fn slow_second_press_is_no_double_click() {
        let mut session = session();
        let pos = screen_of(Vec2::new(-200.0, 0.0));

        begin_gesture(&mut session, pos, false, 0.0);
        end_gesture(&mut session, 0.05);
        begin_gesture(&mut session, pos, false, 0.6);

        assert!(session.ui.property_editor.is_none());
        assert_eq!(session.gesture.mode, DragMode::DraggingSelection);
    }

    #[test]
    fn focus_loss_discards_pending_click_but_keeps_moves() {
        let mut session = session();
        session.selection.insert(SelectionEntry::Planet(0));
        begin_gesture(&mut session, screen_of(Vec2::new(100.0, 100.0)), true, 0.0);
        assert_eq!(
            session.gesture.pending,
            PendingClick::PendingRemoveIfClick(SelectionEntry::Planet(0))
        );

        update_gesture(&mut session, Vec2::new(20.0, 0.0), 0.05);
        cancel_gesture(&mut session);
        end_gesture(&mut session, 0.1);

        assert_eq!(session.gesture.mode, DragMode::Idle);
        assert!(session.selection.contains(SelectionEntry::Planet(0)));
        assert_eq!(system(&session).planets[0].position, Vec2::new(120.0, 100.0));
    }
}
