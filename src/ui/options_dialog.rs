//! Optionen-Dialog für Zoom, Gesten-Schwellen, Größen und Farben.

use crate::app::{AppIntent, EditorSession};
use crate::shared::options::{
    CAMERA_ZOOM_MAX_EXPONENT_RANGE, CAMERA_ZOOM_MIN_EXPONENT_RANGE, CAMERA_ZOOM_STEP_RANGE,
};
use crate::shared::EditorOptions;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, session: &EditorSession) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !session.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = session.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        changed |= drag_value(
                            ui,
                            "Zoom-Schritt:",
                            &mut opts.camera_zoom_step,
                            CAMERA_ZOOM_STEP_RANGE,
                            0.01,
                        );
                        ui.horizontal(|ui| {
                            ui.label("Zoom-Exponenten (min/max):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_min_exponent)
                                        .range(CAMERA_ZOOM_MIN_EXPONENT_RANGE),
                                )
                                .changed();
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_max_exponent)
                                        .range(CAMERA_ZOOM_MAX_EXPONENT_RANGE),
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.scroll_zoom_enabled, "Mausrad zoomt")
                            .changed();
                    });

                    // ── Gesten ──────────────────────────────────────
                    ui.collapsing("Klick / Drag", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zeitschwelle (ms):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.click_time_threshold_ms)
                                        .range(50.0..=2000.0)
                                        .speed(5.0),
                                )
                                .changed();
                        });
                        changed |= drag_value(
                            ui,
                            "Bewegungsschwelle (px):",
                            &mut opts.click_move_threshold_px,
                            1.0..=50.0,
                            0.5,
                        );
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        changed |= drag_value(
                            ui,
                            "Planetenradius neu (Welt):",
                            &mut opts.planet_radius_default,
                            1.0..=1000.0,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Sprungpunkt-Radius (Welt):",
                            &mut opts.jump_point_radius_world,
                            1.0..=500.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Gitterabstand (Welt):",
                            &mut opts.grid_spacing_world,
                            0.0..=100_000.0,
                            10.0,
                        );
                        changed |= color_edit(ui, "Planeten:", &mut opts.planet_color);
                        changed |= color_edit(ui, "Sprungpunkte:", &mut opts.jump_point_color);
                        changed |= color_edit(ui, "Selektiert:", &mut opts.selection_color);
                        changed |= color_edit(ui, "Gitter:", &mut opts.grid_color);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    opts = EditorOptions::default();
                    changed = true;
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview), vor einem Speichern im selben Frame
    if changed {
        events.insert(
            0,
            AppIntent::OptionsChanged {
                options: Box::new(opts),
            },
        );
    }

    events
}

fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
