//! Sitzungszustand: zentrale Datenhaltung des Editors.

mod dialogs;
mod gesture;
mod selection;
mod session;
mod view;

pub use dialogs::{PropertyDraft, UiState};
pub use gesture::{DragMode, GestureState, PendingClick, PressRecord};
pub use selection::SelectionState;
pub use session::EditorSession;
pub use view::ViewState;
