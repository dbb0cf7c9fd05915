//! Handler für Platzierungs-Dialog und Benachrichtigungen.

use floorplan_engine::PointerPos;

use crate::app::AppState;
use crate::app::use_cases;

/// Öffnet den Platzierungs-Dialog an der Klick-Position.
pub fn open_placement(state: &mut AppState, pointer: PointerPos) -> anyhow::Result<()> {
    use_cases::placement::open(state, pointer)
}

/// Schließt den Platzierungs-Dialog.
pub fn close_placement(state: &mut AppState) {
    use_cases::placement::close(state);
}

/// Entfernt eine Benachrichtigung; ungültige Indizes werden ignoriert.
pub fn dismiss_notification(state: &mut AppState, index: usize) {
    if index < state.ui.notifications.len() {
        state.ui.notifications.remove(index);
    }
}
