//! Integrationstests: Zeigergesten, Selektion und Hooks über den AppController.

use glam::Vec2;
use star_system_editor::{
    AppCommand, AppController, AppIntent, EditorSession, JumpPoint, Planet, SelectionEntry,
    StarSystem, SystemHooks,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
enum HookCall {
    MarkDirty(SelectionEntry),
    Save(String),
    JumpGeometry,
    Presence,
    SafeLanes,
}

/// Zeichnet alle Hook-Aufrufe auf; Sprungpunkte mit `auto_position` landen auf (0, 0).
struct RecordingHooks {
    calls: Rc<RefCell<Vec<HookCall>>>,
}

impl SystemHooks for RecordingHooks {
    fn mark_dirty(&mut self, _system: &StarSystem, entry: SelectionEntry) {
        self.calls.borrow_mut().push(HookCall::MarkDirty(entry));
    }

    fn save_system(&mut self, system: &StarSystem) {
        self.calls.borrow_mut().push(HookCall::Save(system.name.clone()));
    }

    fn recompute_jump_geometry(&mut self, system: &mut StarSystem) {
        for jump in system.jumps.iter_mut().filter(|j| j.auto_position) {
            jump.position = Vec2::ZERO;
        }
        self.calls.borrow_mut().push(HookCall::JumpGeometry);
    }

    fn recompute_presence(&mut self, _system: &StarSystem) {
        self.calls.borrow_mut().push(HookCall::Presence);
    }

    fn recompute_safe_lanes(&mut self, _system: &StarSystem) {
        self.calls.borrow_mut().push(HookCall::SafeLanes);
    }
}

/// Planet A (100, 100), Planet B (-200, 0), fester Sprungpunkt J (0, -200) und
/// automatisch positionierter Sprungpunkt K (300, -200).
fn test_system() -> StarSystem {
    let mut system = StarSystem::new("Testsystem", 5000.0);
    system
        .planets
        .push(Planet::new("A", Vec2::new(100.0, 100.0)));
    system
        .planets
        .push(Planet::new("B", Vec2::new(-200.0, 0.0)));
    let mut fixed = JumpPoint::new("J", Vec2::new(0.0, -200.0));
    fixed.auto_position = false;
    system.jumps.push(fixed);
    system
        .jumps
        .push(JumpPoint::new("K", Vec2::new(300.0, -200.0)));
    system
}

/// Viewport 800×600 mit Zoom 1 und Pan 0: Welt (x, y) liegt bei Screen (x + 400, y + 300).
fn setup() -> (AppController, EditorSession, Rc<RefCell<Vec<HookCall>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut controller = AppController::with_hooks(Box::new(RecordingHooks {
        calls: calls.clone(),
    }));
    let mut session = EditorSession::new();

    controller
        .handle_intent(
            &mut session,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("Resize");
    controller
        .handle_intent(
            &mut session,
            AppIntent::OpenSystemRequested {
                system: Arc::new(test_system()),
            },
        )
        .expect("Öffnen");
    session.view.camera.zoom = 1.0;
    session.view.camera.pan = Vec2::ZERO;

    (controller, session, calls)
}

fn screen_of(world: Vec2) -> Vec2 {
    world + Vec2::new(400.0, 300.0)
}

fn press(
    controller: &mut AppController,
    session: &mut EditorSession,
    screen_pos: Vec2,
    additive: bool,
    time: f64,
) {
    controller
        .handle_intent(
            session,
            AppIntent::PointerPressed {
                screen_pos,
                additive,
                time,
            },
        )
        .expect("PointerPressed");
}

fn move_by(controller: &mut AppController, session: &mut EditorSession, delta: Vec2, time: f64) {
    controller
        .handle_intent(
            session,
            AppIntent::PointerMoved {
                delta_px: delta,
                time,
            },
        )
        .expect("PointerMoved");
}

fn release(controller: &mut AppController, session: &mut EditorSession, time: f64) {
    controller
        .handle_intent(session, AppIntent::PointerReleased { time })
        .expect("PointerReleased");
}

fn selection(session: &EditorSession) -> Vec<SelectionEntry> {
    session.selection.iter().collect()
}

fn system(session: &EditorSession) -> &StarSystem {
    session.system.as_deref().expect("System geöffnet")
}

#[test]
fn test_open_system_fits_camera_and_clears_selection() {
    let mut controller = AppController::new();
    let mut session = EditorSession::new();
    session.selection.insert(SelectionEntry::Planet(3));

    controller
        .handle_intent(
            &mut session,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("Resize");
    controller
        .handle_intent(
            &mut session,
            AppIntent::OpenSystemRequested {
                system: Arc::new(test_system()),
            },
        )
        .expect("Öffnen");

    assert!(session.selection.is_empty());
    // 600 / (2 · 5000 · 1.1)
    assert!((session.view.camera.zoom - 600.0 / 11_000.0).abs() < 1e-6);
    assert!(matches!(
        session.command_log.last(),
        Some(AppCommand::OpenSystem { .. })
    ));
}

#[test]
fn test_click_hits_planet_at_documented_screen_position() {
    let (mut controller, mut session, _) = setup();

    press(&mut controller, &mut session, Vec2::new(500.0, 400.0), false, 0.0);
    release(&mut controller, &mut session, 0.05);
    assert_eq!(selection(&session), vec![SelectionEntry::Planet(0)]);

    press(&mut controller, &mut session, Vec2::new(900.0, 400.0), false, 1.0);
    release(&mut controller, &mut session, 1.05);
    assert!(session.selection.is_empty());
}

#[test]
fn test_additive_click_on_selected_removes_only_on_release() {
    let (mut controller, mut session, _) = setup();
    press(&mut controller, &mut session, screen_of(Vec2::new(100.0, 100.0)), false, 0.0);
    release(&mut controller, &mut session, 0.05);
    press(&mut controller, &mut session, screen_of(Vec2::new(-200.0, 0.0)), true, 1.0);
    release(&mut controller, &mut session, 1.05);
    assert_eq!(
        selection(&session),
        vec![SelectionEntry::Planet(0), SelectionEntry::Planet(1)]
    );

    press(&mut controller, &mut session, screen_of(Vec2::new(100.0, 100.0)), true, 2.0);
    assert!(session.selection.contains(SelectionEntry::Planet(0)));

    release(&mut controller, &mut session, 2.05);
    assert_eq!(selection(&session), vec![SelectionEntry::Planet(1)]);
}

#[test]
fn test_quick_additive_reclick_deselects() {
    let (mut controller, mut session, _) = setup();
    press(&mut controller, &mut session, screen_of(Vec2::new(-200.0, 0.0)), false, 0.0);
    release(&mut controller, &mut session, 0.05);

    let a = screen_of(Vec2::new(100.0, 100.0));
    press(&mut controller, &mut session, a, true, 1.0);
    release(&mut controller, &mut session, 1.0);
    press(&mut controller, &mut session, a, true, 1.1);
    release(&mut controller, &mut session, 1.15);

    assert!(session.ui.property_editor.is_none());
    assert_eq!(selection(&session), vec![SelectionEntry::Planet(1)]);
}

#[test]
fn test_plain_click_on_selected_reduces_selection() {
    let (mut controller, mut session, _) = setup();
    controller
        .handle_intent(&mut session, AppIntent::SelectAllRequested)
        .expect("SelectAll");
    assert_eq!(session.selection.len(), 4);

    press(&mut controller, &mut session, screen_of(Vec2::new(0.0, -200.0)), false, 0.0);
    assert_eq!(session.selection.len(), 4);
    release(&mut controller, &mut session, 0.05);

    assert_eq!(selection(&session), vec![SelectionEntry::JumpPoint(0)]);
}

#[test]
fn test_drag_moves_whole_selection_and_notifies_hooks() {
    let (mut controller, mut session, calls) = setup();
    press(&mut controller, &mut session, screen_of(Vec2::new(100.0, 100.0)), false, 0.0);
    release(&mut controller, &mut session, 0.05);
    press(&mut controller, &mut session, screen_of(Vec2::new(-200.0, 0.0)), true, 1.0);
    release(&mut controller, &mut session, 1.05);
    calls.borrow_mut().clear();

    press(&mut controller, &mut session, screen_of(Vec2::new(100.0, 100.0)), false, 2.0);
    for step in 1..=5 {
        move_by(&mut controller, &mut session, Vec2::new(10.0, 0.0), 2.0 + step as f64 * 0.01);
    }
    release(&mut controller, &mut session, 2.1);

    assert_eq!(system(&session).planets[0].position, Vec2::new(150.0, 100.0));
    assert_eq!(system(&session).planets[1].position, Vec2::new(-150.0, 0.0));
    assert_eq!(session.selection.len(), 2);

    let calls = calls.borrow();
    assert!(calls.contains(&HookCall::MarkDirty(SelectionEntry::Planet(0))));
    assert!(calls.contains(&HookCall::MarkDirty(SelectionEntry::Planet(1))));
    assert!(calls.contains(&HookCall::JumpGeometry));
    assert!(calls.contains(&HookCall::SafeLanes));
    assert!(calls.contains(&HookCall::Save("Testsystem".into())));

    // Hook hat nur den automatisch positionierten Sprungpunkt versetzt
    assert_eq!(system(&session).jumps[0].position, Vec2::new(0.0, -200.0));
    assert_eq!(system(&session).jumps[1].position, Vec2::ZERO);
}

#[test]
fn test_zero_net_drag_still_clears_auto_position() {
    let (mut controller, mut session, _) = setup();
    let jump = Vec2::new(300.0, -200.0);

    press(&mut controller, &mut session, screen_of(jump), false, 0.0);
    move_by(&mut controller, &mut session, Vec2::new(30.0, 0.0), 0.05);
    move_by(&mut controller, &mut session, Vec2::new(-30.0, 0.0), 0.1);
    release(&mut controller, &mut session, 0.15);

    let moved = &system(&session).jumps[1];
    assert_eq!(moved.position, jump);
    assert!(!moved.auto_position);
}

#[test]
fn test_pan_moves_content_with_pointer() {
    let (mut controller, mut session, _) = setup();
    let start = Vec2::new(50.0, 50.0);

    press(&mut controller, &mut session, start, false, 0.0);
    move_by(&mut controller, &mut session, Vec2::new(40.0, 25.0), 0.05);
    release(&mut controller, &mut session, 0.1);

    let planet_screen = session.view.camera.world_to_screen(
        Vec2::new(100.0, 100.0),
        session.view.viewport_vec(),
    );
    assert_eq!(planet_screen, Vec2::new(540.0, 425.0));
    assert!(session.selection.is_empty());
}

#[test]
fn test_focus_lost_keeps_moves_and_discards_pending_click() {
    let (mut controller, mut session, calls) = setup();
    press(&mut controller, &mut session, screen_of(Vec2::new(100.0, 100.0)), false, 0.0);
    release(&mut controller, &mut session, 0.05);

    press(&mut controller, &mut session, screen_of(Vec2::new(100.0, 100.0)), true, 1.0);
    move_by(&mut controller, &mut session, Vec2::new(0.0, 20.0), 1.05);
    controller
        .handle_intent(&mut session, AppIntent::FocusLost)
        .expect("FocusLost");
    release(&mut controller, &mut session, 1.1);

    assert!(session.selection.contains(SelectionEntry::Planet(0)));
    assert_eq!(system(&session).planets[0].position, Vec2::new(100.0, 120.0));
    assert!(calls
        .borrow()
        .contains(&HookCall::MarkDirty(SelectionEntry::Planet(0))));
}

#[test]
fn test_double_click_opens_and_apply_writes_back() {
    let (mut controller, mut session, calls) = setup();
    let pos = screen_of(Vec2::new(-200.0, 0.0));

    press(&mut controller, &mut session, pos, false, 0.0);
    release(&mut controller, &mut session, 0.05);
    press(&mut controller, &mut session, pos, false, 0.15);
    release(&mut controller, &mut session, 0.2);

    let Some(star_system_editor::app::PropertyDraft::Planet { draft, .. }) =
        session.ui.property_editor.as_mut()
    else {
        panic!("Planeten-Editor sollte offen sein");
    };
    draft.population = 5_000;
    draft.faction = Some("Empire".into());
    draft.add_tech("Basic Outfits 1");
    calls.borrow_mut().clear();

    controller
        .handle_intent(&mut session, AppIntent::PropertyEditorApplied)
        .expect("Übernehmen");

    let planet = &system(&session).planets[1];
    assert_eq!(planet.population, 5_000);
    assert_eq!(planet.faction.as_deref(), Some("Empire"));
    assert_eq!(planet.tech, vec!["Basic Outfits 1"]);
    assert_eq!(planet.position, Vec2::new(-200.0, 0.0));
    assert!(session.ui.property_editor.is_none());

    let calls = calls.borrow();
    assert!(calls.contains(&HookCall::MarkDirty(SelectionEntry::Planet(1))));
    assert!(calls.contains(&HookCall::Presence));
    assert!(calls.contains(&HookCall::SafeLanes));
}

#[test]
fn test_close_editor_saves_then_clears() {
    let (mut controller, mut session, calls) = setup();
    controller
        .handle_intent(&mut session, AppIntent::SelectAllRequested)
        .expect("SelectAll");

    controller
        .handle_intent(&mut session, AppIntent::CloseEditorRequested)
        .expect("Schließen");

    assert!(session.system.is_none());
    assert!(session.selection.is_empty());
    assert_eq!(
        calls.borrow().as_slice(),
        &[HookCall::Save("Testsystem".into())]
    );
}

#[test]
fn test_gestures_without_system_are_ignored() {
    let mut controller = AppController::new();
    let mut session = EditorSession::new();

    press(&mut controller, &mut session, Vec2::new(10.0, 10.0), false, 0.0);
    move_by(&mut controller, &mut session, Vec2::new(50.0, 0.0), 0.1);
    release(&mut controller, &mut session, 0.2);

    assert_eq!(session.view.camera.pan, Vec2::ZERO);
    assert_eq!(session.command_log.len(), 3);
}

#[test]
fn test_add_planet_at_view_center_and_reject_duplicate() {
    let (mut controller, mut session, calls) = setup();
    session.view.camera.pan = Vec2::new(50.0, -20.0);

    controller
        .handle_intent(
            &mut session,
            AppIntent::AddPlanetRequested {
                name: " Neu ".into(),
            },
        )
        .expect("Planet anlegen");

    let added = system(&session).planets.last().expect("neuer Planet");
    assert_eq!(added.name, "Neu");
    assert_eq!(added.position, Vec2::new(50.0, -20.0));
    assert_eq!(selection(&session), vec![SelectionEntry::Planet(2)]);
    assert!(calls.borrow().contains(&HookCall::Presence));

    let result = controller.handle_intent(
        &mut session,
        AppIntent::AddPlanetRequested { name: "A".into() },
    );
    assert!(result.is_err());
    assert_eq!(system(&session).planets.len(), 3);
    assert!(session.ui.status_message.is_some());

    controller
        .handle_intent(&mut session, AppIntent::StatusMessageDismissed)
        .expect("Meldung schließen");
    assert!(session.ui.status_message.is_none());
}

#[test]
fn test_delete_selected_shifts_remaining_indices() {
    let (mut controller, mut session, calls) = setup();
    press(&mut controller, &mut session, screen_of(Vec2::new(100.0, 100.0)), false, 0.0);
    release(&mut controller, &mut session, 0.05);

    controller
        .handle_intent(&mut session, AppIntent::DeleteSelectedRequested)
        .expect("Löschen");

    assert_eq!(system(&session).planets.len(), 1);
    assert_eq!(system(&session).planets[0].name, "B");
    assert!(session.selection.is_empty());
    assert!(calls.borrow().contains(&HookCall::Presence));

    press(&mut controller, &mut session, screen_of(Vec2::new(-200.0, 0.0)), false, 1.0);
    release(&mut controller, &mut session, 1.05);
    assert_eq!(selection(&session), vec![SelectionEntry::Planet(0)]);
}

#[test]
fn test_zoom_in_then_out_restores_camera() {
    let (mut controller, mut session, _) = setup();
    session.view.camera.pan = Vec2::new(120.0, -30.0);

    controller
        .handle_intent(&mut session, AppIntent::ZoomInRequested)
        .expect("ZoomIn");
    assert!(session.view.camera.zoom > 1.0);
    controller
        .handle_intent(&mut session, AppIntent::ZoomOutRequested)
        .expect("ZoomOut");

    assert!((session.view.camera.zoom - 1.0).abs() < 1e-5);
    assert!((session.view.camera.pan - Vec2::new(120.0, -30.0)).length() < 1e-3);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut session = EditorSession::new();

    assert!(!session.should_exit);

    controller
        .handle_intent(&mut session, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(session.should_exit);
    assert!(matches!(
        session.command_log.last(),
        Some(AppCommand::RequestExit)
    ));
}
