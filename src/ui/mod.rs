//! UI-Komponenten: Menü, Toolbar, Eigenschaften-Editor, Input-Handling, Dialoge.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Keyboard-Shortcuts und Zeiger-Rohereignisse sind in eigene Dateien extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_property_editor;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
