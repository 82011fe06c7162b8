//! Builder für Render-Szenen aus der Editor-Sitzung.

use crate::app::EditorSession;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen Sitzungszustand.
///
/// System und Selektion werden per `Arc` geteilt, nicht kopiert.
pub fn build(session: &EditorSession) -> RenderScene {
    RenderScene {
        system: session.system.clone(),
        camera: session.view.camera.clone(),
        viewport_size: session.view.viewport_size,
        selection: session.selection.entries.clone(),
        show_grid: session.view.show_grid,
        options: session.options.clone(),
    }
}
