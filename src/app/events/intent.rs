use crate::core::StarSystem;
use crate::shared::EditorOptions;
use std::sync::Arc;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// System im Editor öffnen
    OpenSystemRequested { system: Arc<StarSystem> },
    /// System über die Hooks speichern
    SaveSystemRequested,
    /// Editor schließen (speichert über die Hooks)
    CloseEditorRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    /// Primäre Maustaste im Viewport gedrückt.
    ///
    /// `screen_pos` ist Widget-lokal mit y nach oben, `time` in Sekunden.
    PointerPressed {
        screen_pos: glam::Vec2,
        additive: bool,
        time: f64,
    },
    /// Zeiger bewegt, während die Taste gedrückt ist (Pixel, y nach oben)
    PointerMoved { delta_px: glam::Vec2, time: f64 },
    /// Primäre Maustaste losgelassen
    PointerReleased { time: f64 },
    /// Viewport hat den Eingabefokus verloren
    FocusLost,

    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf den Systemradius einpassen
    ResetCameraRequested,
    /// Gitter ein-/ausblenden
    ToggleGridRequested,

    /// Alle Planeten und Sprungpunkte selektieren
    SelectAllRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Selektierte Objekte entfernen
    DeleteSelectedRequested,
    /// Neuen Planeten in der Viewport-Mitte anlegen
    AddPlanetRequested { name: String },
    /// Gesamtes System skalieren
    ScaleSystemRequested { factor: f32 },

    /// Eigenschaften-Editor für das erste selektierte Objekt öffnen
    EditPropertiesRequested,
    /// Änderungen im Eigenschaften-Editor übernehmen und schließen
    PropertyEditorApplied,
    /// Eigenschaften-Editor ohne Übernahme schließen
    PropertyEditorCancelled,

    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im UI geändert
    OptionsChanged { options: Box<EditorOptions> },
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
    /// Fehlermeldung in der Status-Bar weggeklickt
    StatusMessageDismissed,
}
