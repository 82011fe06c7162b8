//! Application Controller für zentrale Event-Verarbeitung.

use super::hooks::{LoggingHooks, SystemEffect, SystemHooks};
use super::render_scene;
use super::{AppCommand, AppIntent, EditorSession};
use crate::shared::RenderScene;
use std::sync::Arc;

/// Orchestriert UI-Events und Use-Cases auf der Editor-Sitzung.
///
/// Nach jedem Command werden die vorgemerkten `SystemEffect`s an die Hooks
/// weitergereicht, solange das System noch geöffnet ist.
pub struct AppController {
    hooks: Box<dyn SystemHooks>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller mit protokollierenden Hooks.
    pub fn new() -> Self {
        Self::with_hooks(Box::new(LoggingHooks))
    }

    /// Erstellt einen Controller mit eigenen Hooks (Persistenz, Tests).
    pub fn with_hooks(hooks: Box<dyn SystemHooks>) -> Self {
        Self { hooks }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        session: &mut EditorSession,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(session, intent);
        for command in commands {
            self.handle_command(session, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, session: &EditorSession, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(session, intent)
    }

    /// Führt mutierende Commands auf der Sitzung aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        session: &mut EditorSession,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        session.command_log.record(&command);
        use super::handlers;

        let result = match command {
            // === Lebenszyklus ===
            AppCommand::OpenSystem { system } => {
                handlers::lifecycle::open_system(session, system);
                Ok(())
            }
            AppCommand::SaveSystem => {
                handlers::lifecycle::save_system(session);
                Ok(())
            }
            AppCommand::CloseEditor => {
                // Offene Aufträge gehen noch an das System, bevor es verschwindet
                self.dispatch_effects(session);
                handlers::lifecycle::close_editor(session);
                Ok(())
            }
            AppCommand::RequestExit => {
                handlers::lifecycle::request_exit(session);
                Ok(())
            }

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => {
                handlers::view::set_viewport_size(session, size);
                Ok(())
            }
            AppCommand::ZoomIn => {
                handlers::view::zoom_in(session);
                Ok(())
            }
            AppCommand::ZoomOut => {
                handlers::view::zoom_out(session);
                Ok(())
            }
            AppCommand::FitCameraToSystem => {
                handlers::view::fit_camera(session);
                Ok(())
            }
            AppCommand::ToggleGrid => {
                handlers::view::toggle_grid(session);
                Ok(())
            }

            // === Zeigergesten ===
            AppCommand::BeginPointerGesture {
                screen_pos,
                additive,
                time,
            } => {
                handlers::pointer::begin(session, screen_pos, additive, time);
                Ok(())
            }
            AppCommand::UpdatePointerGesture { delta_px, time } => {
                handlers::pointer::update(session, delta_px, time);
                Ok(())
            }
            AppCommand::EndPointerGesture { time } => {
                handlers::pointer::end(session, time);
                Ok(())
            }
            AppCommand::CancelPointerGesture => {
                handlers::pointer::cancel(session);
                Ok(())
            }

            // === Selektion & Editing ===
            AppCommand::SelectAll => {
                handlers::selection::select_all(session);
                Ok(())
            }
            AppCommand::ClearSelection => {
                handlers::selection::clear(session);
                Ok(())
            }
            AppCommand::RemoveSelected => {
                handlers::editing::remove_selected(session);
                Ok(())
            }
            AppCommand::AddPlanet { name, world_pos } => {
                handlers::editing::add_planet(session, &name, world_pos)
            }
            AppCommand::ScaleSystem { factor } => handlers::editing::scale_system(session, factor),

            // === Eigenschaften & Optionen ===
            AppCommand::OpenPropertyEditor { entry } => {
                handlers::dialog::open_property_editor(session, entry)
            }
            AppCommand::ApplyPropertyEditor => handlers::dialog::apply_property_editor(session),
            AppCommand::ClosePropertyEditor => {
                handlers::dialog::close_property_editor(session);
                Ok(())
            }
            AppCommand::OpenOptionsDialog => {
                handlers::dialog::open_options_dialog(session);
                Ok(())
            }
            AppCommand::CloseOptionsDialog => {
                handlers::dialog::close_options_dialog(session);
                Ok(())
            }
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(session, *options);
                Ok(())
            }
            AppCommand::SaveOptions => handlers::dialog::save_options(session),
            AppCommand::DismissStatusMessage => {
                handlers::dialog::dismiss_status_message(session);
                Ok(())
            }
        };

        // Auch nach Fehlern: bereits vorgemerkte Aufträge nicht verlieren
        self.dispatch_effects(session);

        if let Err(e) = &result {
            session.ui.status_message = Some(format!("{:#}", e));
        }
        result
    }

    /// Reicht vorgemerkte Aufträge an die Hooks weiter.
    fn dispatch_effects(&mut self, session: &mut EditorSession) {
        let effects = session.take_effects();
        if effects.is_empty() {
            return;
        }
        let Some(system) = session.system.as_mut() else {
            log::warn!("{} Aufträge ohne geöffnetes System verworfen", effects.len());
            return;
        };

        for effect in effects {
            match effect {
                SystemEffect::MarkDirty(entry) => self.hooks.mark_dirty(system, entry),
                SystemEffect::SaveSystem => self.hooks.save_system(system),
                SystemEffect::RecomputeJumpGeometry => {
                    self.hooks.recompute_jump_geometry(Arc::make_mut(system))
                }
                SystemEffect::RecomputePresence => self.hooks.recompute_presence(system),
                SystemEffect::RecomputeSafeLanes => self.hooks.recompute_safe_lanes(system),
            }
        }
    }

    /// Baut die Render-Szene aus dem aktuellen Sitzungszustand.
    pub fn build_render_scene(&self, session: &EditorSession) -> RenderScene {
        render_scene::build(session)
    }
}
