//! Felder des Planeten-Editors.

use crate::core::Planet;

/// Rendert alle bearbeitbaren Planeten-Felder.
pub(super) fn render_planet_fields(ui: &mut egui::Ui, planet: &mut Planet, tech_input: &mut String) {
    ui.label(format!(
        "Position: ({:.1}, {:.1})",
        planet.position.x, planet.position.y
    ));

    egui::Grid::new("planet_general")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Radius:");
            ui.add(
                egui::DragValue::new(&mut planet.radius)
                    .range(1.0..=1000.0)
                    .speed(0.5),
            );
            ui.end_row();

            ui.label("Bevölkerung:");
            ui.add(egui::DragValue::new(&mut planet.population).speed(1000.0));
            ui.end_row();

            ui.label("Fraktion:");
            let mut faction = planet.faction.clone().unwrap_or_default();
            if ui.text_edit_singleline(&mut faction).changed() {
                planet.faction = Some(faction);
            }
            ui.end_row();

            ui.label("Präsenz:");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut planet.presence.value).speed(1.0));
                ui.label("Reichweite");
                ui.add(egui::DragValue::new(&mut planet.presence.range).range(0..=10));
            });
            ui.end_row();
        });

    ui.separator();
    render_services(ui, planet);

    ui.separator();
    render_tech(ui, planet, tech_input);

    ui.separator();
    ui.collapsing("Beschreibungen", |ui| {
        ui.label("Beschreibung:");
        ui.text_edit_multiline(&mut planet.description);
        ui.add_enabled_ui(planet.services.bar, |ui| {
            ui.label("Bar:");
            ui.text_edit_multiline(&mut planet.bar_description);
        });
    });

    ui.collapsing("Grafik", |ui| {
        egui::Grid::new("planet_gfx").num_columns(2).show(ui, |ui| {
            ui.label("Weltraum:");
            ui.text_edit_singleline(&mut planet.gfx_space);
            ui.end_row();
            ui.label("Landeansicht:");
            ui.text_edit_singleline(&mut planet.gfx_exterior);
            ui.end_row();
        });
    });
}

fn render_services(ui: &mut egui::Ui, planet: &mut Planet) {
    let services = &mut planet.services;
    ui.label("Dienste:");
    ui.checkbox(&mut services.land, "Landen");
    // Alle weiteren Dienste setzen Landen voraus
    ui.add_enabled_ui(services.land, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.checkbox(&mut services.refuel, "Tanken");
            ui.checkbox(&mut services.bar, "Bar");
            ui.checkbox(&mut services.missions, "Missionen");
            ui.checkbox(&mut services.commodity, "Handel");
            ui.checkbox(&mut services.outfits, "Ausrüstung");
            ui.checkbox(&mut services.shipyard, "Werft");
        });
    });
}

fn render_tech(ui: &mut egui::Ui, planet: &mut Planet, tech_input: &mut String) {
    ui.label("Tech-Gruppen:");

    let mut remove: Option<String> = None;
    for tech in &planet.tech {
        ui.horizontal(|ui| {
            ui.label(tech);
            if ui.small_button("✖").clicked() {
                remove = Some(tech.clone());
            }
        });
    }
    if let Some(tech) = remove {
        planet.remove_tech(&tech);
    }

    ui.horizontal(|ui| {
        let response = ui.text_edit_singleline(tech_input);
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("Hinzufügen").clicked() || submitted) && planet.add_tech(tech_input) {
            tech_input.clear();
        }
    });
}
