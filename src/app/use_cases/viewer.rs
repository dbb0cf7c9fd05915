//! Use-Case-Funktionen für Seite, Interaktionsmodus und Container-Layout.

use floorplan_engine::{ContainerRect, ViewerMode};

use super::placement;
use crate::app::AppState;

/// Wechselt die Seite. Laufende Sessions und offene Dialoge werden verworfen.
pub fn set_page(state: &mut AppState, page: u32) {
    let page = page.max(1);
    if page == state.view.page {
        return;
    }
    if let Some(marker_id) = state.drag.cancel() {
        log::debug!("Session für Marker {} durch Seitenwechsel verworfen", marker_id);
    }
    state.view.drag_override = None;
    placement::close(state);
    state.view.page = page;
}

/// Setzt den Interaktionsmodus.
///
/// Außerhalb von `Select` gibt es keine Sessions, außerhalb von `AddMarker`
/// keinen Platzierungs-Dialog.
pub fn set_mode(state: &mut AppState, mode: ViewerMode) {
    if mode != ViewerMode::Select && state.drag.cancel().is_some() {
        state.view.drag_override = None;
    }
    if mode != ViewerMode::AddMarker {
        placement::close(state);
    }
    state.view.mode = mode;
}

/// Speichert die Bounding-Box und holt eine wartende Platzierung nach.
///
/// Eine laufende Session rechnet ab sofort gegen die neue Box.
pub fn set_container(state: &mut AppState, rect: ContainerRect) -> anyhow::Result<()> {
    state.view.container = Some(rect);
    if state.drag.set_container(rect) {
        log::debug!("Container während der Session neu gelayoutet");
    }
    placement::replay_pending(state)
}

/// Setzt die Ansicht beim Wechsel des Floorplans zurück.
///
/// Sessions, Zwischenstände und Platzierungen gehören zum alten Dokument.
pub fn reset_for_floorplan(state: &mut AppState) {
    if let Some(marker_id) = state.drag.cancel() {
        log::debug!("Session für Marker {} durch Floorplan-Wechsel verworfen", marker_id);
    }
    state.view.drag_override = None;
    placement::close(state);
    state.view.page = state.options.default_page.max(1);
}
