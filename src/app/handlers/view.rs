//! Handler für Seite, Interaktionsmodus und Container-Layout.

use floorplan_engine::{ContainerRect, ViewerMode};

use crate::app::AppState;
use crate::app::use_cases;

/// Wechselt die angezeigte Seite.
pub fn set_page(state: &mut AppState, page: u32) {
    use_cases::viewer::set_page(state, page);
}

/// Setzt den Interaktionsmodus.
pub fn set_mode(state: &mut AppState, mode: ViewerMode) {
    use_cases::viewer::set_mode(state, mode);
}

/// Aktualisiert die Container-Bounding-Box und holt wartende Platzierungen nach.
pub fn set_container(state: &mut AppState, rect: ContainerRect) -> anyhow::Result<()> {
    use_cases::viewer::set_container(state, rect)
}
