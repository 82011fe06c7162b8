//! Star System Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, EditorSession, LoggingHooks, SystemEffect,
    SystemHooks, UiState, ViewState,
};
pub use core::{
    Camera2D, JumpPoint, Planet, PlanetPresence, PlanetServices, SelectionEntry, StarSystem,
};
pub use render::{draw_scene, SpriteKind, SystemRenderer};
pub use shared::{EditorOptions, RenderScene};
