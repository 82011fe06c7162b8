//! Use-Cases für strukturelle Änderungen am System.

mod add_planet;
mod remove_selected;
mod scale_system;

use super::selection::clear_selection;

pub use add_planet::add_planet;
pub use remove_selected::remove_selected;
pub use scale_system::scale_system;
