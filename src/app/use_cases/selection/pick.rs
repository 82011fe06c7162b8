//! Use-Case: Hit-Test und Klick-Selektion.

use crate::app::state::{PendingClick, SelectionState};
use crate::core::{Camera2D, SelectionEntry, StarSystem};
use glam::Vec2;

/// Sucht das Objekt unter dem Zeiger.
///
/// Planeten haben Vorrang vor Sprungpunkten, innerhalb einer Art gewinnt der
/// kleinste Index. Der Abstand wird im zoom-skalierten Raum gegen
/// `(radius * zoom)²` geprüft, die Trefferfläche wächst also mit dem Sprite.
pub fn hit_test(
    system: &StarSystem,
    camera: &Camera2D,
    jump_point_radius: f32,
    pointer_world: Vec2,
) -> Option<SelectionEntry> {
    let zoom = camera.zoom;
    let hits = |center: Vec2, radius: f32| {
        let scaled = (pointer_world - center) * zoom;
        let r = radius * zoom;
        scaled.length_squared() < r * r
    };

    system
        .planets
        .iter()
        .position(|planet| hits(planet.position, planet.radius))
        .map(SelectionEntry::Planet)
        .or_else(|| {
            system
                .jumps
                .iter()
                .position(|jump| hits(jump.position, jump_point_radius))
                .map(SelectionEntry::JumpPoint)
        })
}

/// Aktualisiert die Selektion beim Drücken auf ein Objekt.
///
/// Nicht selektierte Objekte werden sofort aufgenommen (ohne `additive`
/// ersetzt das die Selektion). Bei bereits selektierten Objekten fällt die
/// Entscheidung erst beim Loslassen, damit ein Drag die ganze Selektion
/// verschieben kann.
pub fn toggle(
    selection: &mut SelectionState,
    entry: SelectionEntry,
    additive: bool,
) -> PendingClick {
    if selection.contains(entry) {
        if additive {
            PendingClick::PendingRemoveIfClick(entry)
        } else {
            PendingClick::PendingAdd(entry)
        }
    } else {
        if !additive {
            selection.clear();
        }
        selection.insert(entry);
        PendingClick::None
    }
}

/// Wendet eine aufgeschobene Selektionsänderung an (Geste war ein Klick).
pub fn resolve_click(selection: &mut SelectionState, pending: PendingClick) {
    match pending {
        PendingClick::None => {}
        PendingClick::PendingAdd(entry) => selection.select_only(entry),
        PendingClick::PendingRemoveIfClick(entry) => selection.remove(entry),
    }
}
