//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod hooks;
mod intent_mapping;
pub mod render_scene;
/// Sitzungszustand und Controller
///
/// Dieses Modul verwaltet den Zustand einer Editor-Sitzung (System, View, Gesten).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use hooks::{LoggingHooks, SystemEffect, SystemHooks};
pub use render_scene::build as build_render_scene;
pub use state::{
    DragMode, EditorSession, PendingClick, PropertyDraft, SelectionState, UiState, ViewState,
};
