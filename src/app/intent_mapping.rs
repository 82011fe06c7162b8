//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, EditorSession};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(session: &EditorSession, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenSystemRequested { system } => vec![AppCommand::OpenSystem { system }],
        AppIntent::SaveSystemRequested => vec![AppCommand::SaveSystem],
        AppIntent::CloseEditorRequested => {
            vec![AppCommand::SaveSystem, AppCommand::CloseEditor]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::PointerPressed {
            screen_pos,
            additive,
            time,
        } => vec![AppCommand::BeginPointerGesture {
            screen_pos,
            additive,
            time,
        }],
        AppIntent::PointerMoved { delta_px, time } => {
            vec![AppCommand::UpdatePointerGesture { delta_px, time }]
        }
        AppIntent::PointerReleased { time } => vec![AppCommand::EndPointerGesture { time }],
        AppIntent::FocusLost => vec![AppCommand::CancelPointerGesture],

        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetCameraRequested => vec![AppCommand::FitCameraToSystem],
        AppIntent::ToggleGridRequested => vec![AppCommand::ToggleGrid],

        AppIntent::SelectAllRequested => vec![AppCommand::SelectAll],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::RemoveSelected],
        AppIntent::AddPlanetRequested { name } => {
            // Neue Planeten landen in der Viewport-Mitte
            let world_pos = session.view.camera.center_world();
            vec![AppCommand::AddPlanet { name, world_pos }]
        }
        AppIntent::ScaleSystemRequested { factor } => vec![AppCommand::ScaleSystem { factor }],

        AppIntent::EditPropertiesRequested => session
            .selection
            .iter()
            .next()
            .map(|entry| vec![AppCommand::OpenPropertyEditor { entry }])
            .unwrap_or_default(),
        AppIntent::PropertyEditorApplied => vec![
            AppCommand::ApplyPropertyEditor,
            AppCommand::ClosePropertyEditor,
        ],
        AppIntent::PropertyEditorCancelled => vec![AppCommand::ClosePropertyEditor],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::StatusMessageDismissed => vec![AppCommand::DismissStatusMessage],
    }
}
