use crate::core::Camera2D;

/// View-bezogener Sitzungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Gitter-Sichtbarkeit
    pub show_grid: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            show_grid: true,
        }
    }

    /// Viewport-Größe als Vektor.
    pub fn viewport_vec(&self) -> glam::Vec2 {
        glam::Vec2::new(self.viewport_size[0], self.viewport_size[1])
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
