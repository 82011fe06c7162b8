//! Use-Case-Funktionen für die Selektion.
//!
//! - `pick`: Hit-Test und Klick-Selektion
//! - `move_entities`: Verschieben selektierter Objekte
//! - `helpers`: Alles/nichts selektieren

mod helpers;
mod move_entities;
mod pick;

pub use helpers::{clear_selection, select_all};
pub use move_entities::{clear_auto_position_of_selected, move_selected_entities};
pub use pick::{hit_test, resolve_click, toggle};
