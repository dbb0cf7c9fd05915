//! Use-Case-Funktionen für den Platzierungs-Dialog.
//!
//! Ein Klick im AddMarker-Modus wird in Prozent umgerechnet und öffnet den
//! Dialog. Ist der Container noch nicht gelayoutet, wird der Klick gemerkt und
//! beim nächsten `SetContainerRect` nachgeholt.

use floorplan_engine::{MarkerError, PointerPos, to_percent};

use crate::app::AppState;
use crate::app::state::PlacementDialogState;

/// Öffnet den Dialog an der Klick-Position.
pub fn open(state: &mut AppState, pointer: PointerPos) -> anyhow::Result<()> {
    if state.ui.placement_dialog.visible {
        log::debug!("Platzierungs-Dialog bereits offen, Klick ignoriert");
        return Ok(());
    }

    let container = state.view.container.unwrap_or_default();
    if container.is_laid_out() && !container.contains(pointer) {
        log::debug!("Klick außerhalb des Dokuments ignoriert");
        return Ok(());
    }
    match to_percent(pointer, container) {
        Ok(position) => {
            let dialog = &mut state.ui.placement_dialog;
            dialog.visible = true;
            dialog.position = Some(position);
            state.view.pending_placement = None;
            log::debug!("Platzierung bei ({}, {}) %", position.x, position.y);
            Ok(())
        }
        Err(MarkerError::LayoutNotReady { .. }) => {
            log::debug!("Container ohne Layout, Platzierung wird nachgeholt");
            state.view.pending_placement = Some(pointer);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Holt eine wartende Platzierung nach, sobald der Container gelayoutet ist.
pub fn replay_pending(state: &mut AppState) -> anyhow::Result<()> {
    let laid_out = state.view.container.is_some_and(|rect| rect.is_laid_out());
    if !laid_out {
        return Ok(());
    }
    match state.view.pending_placement.take() {
        Some(pointer) => open(state, pointer),
        None => Ok(()),
    }
}

/// Schließt den Dialog und verwirft eine wartende Platzierung.
pub fn close(state: &mut AppState) {
    state.ui.placement_dialog = PlacementDialogState::new();
    state.view.pending_placement = None;
}
