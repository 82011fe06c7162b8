use crate::core::{SelectionEntry, StarSystem};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// System laden, Selektion leeren, Kamera einpassen
    OpenSystem { system: Arc<StarSystem> },
    /// Speichern des Systems vormerken
    SaveSystem,
    /// Editor schließen
    CloseEditor,
    /// Anwendung beenden
    RequestExit,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    /// Zeigergeste beginnen (Hit-Test, Selektion, Modus)
    BeginPointerGesture {
        screen_pos: glam::Vec2,
        additive: bool,
        time: f64,
    },
    /// Zeigergeste fortsetzen (Pan oder Verschieben)
    UpdatePointerGesture { delta_px: glam::Vec2, time: f64 },
    /// Zeigergeste beenden (Klick oder Drag)
    EndPointerGesture { time: f64 },
    /// Zeigergeste abbrechen (Fokusverlust)
    CancelPointerGesture,

    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf den Systemradius einpassen
    FitCameraToSystem,
    /// Gitter umschalten
    ToggleGrid,

    /// Alles selektieren
    SelectAll,
    /// Selektion aufheben
    ClearSelection,
    /// Selektierte Objekte entfernen
    RemoveSelected,
    /// Planet an Weltposition anlegen
    AddPlanet { name: String, world_pos: glam::Vec2 },
    /// System um Faktor skalieren
    ScaleSystem { factor: f32 },

    /// Eigenschaften-Editor öffnen
    OpenPropertyEditor { entry: SelectionEntry },
    /// Arbeitskopie ins System übernehmen
    ApplyPropertyEditor,
    /// Eigenschaften-Editor schließen
    ClosePropertyEditor,

    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen (bereinigt)
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen speichern
    SaveOptions,
    /// Fehlermeldung der Status-Bar entfernen
    DismissStatusMessage,
}
