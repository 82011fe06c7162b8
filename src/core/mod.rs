//! Core-Domänentypen: Sternsystem, Planeten, Sprungpunkte, Selektion, Kamera.

pub mod camera;
pub mod selection;
pub mod system;

pub use camera::Camera2D;
pub use selection::SelectionEntry;
pub use system::{
    JumpPoint, Planet, PlanetPresence, PlanetServices, StarSystem, PLANET_RADIUS_DEFAULT,
};
