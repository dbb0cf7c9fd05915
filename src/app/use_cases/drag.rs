//! Use-Case-Funktionen für Drag/Resize von Markern.
//!
//! Während einer Session zeigt die Ansicht den gedrosselten Zwischenstand
//! (`view.drag_override`), der Store bleibt unverändert. Erst beim Loslassen
//! wird genau ein Update mit dem Endwert gesendet.

use anyhow::Context;
use floorplan_engine::{DragChange, DragPreview, MarkerHandle, MarkerPatch, PointerPos};

use crate::api::FloorplanBackend;
use crate::app::AppState;

/// Startet eine Session, sofern Modus, Marker und Layout es zulassen.
pub fn begin(
    state: &mut AppState,
    marker_id: u64,
    handle: MarkerHandle,
    pointer: PointerPos,
) -> anyhow::Result<()> {
    let Some(marker) = state.store.get(marker_id) else {
        log::warn!("Drag auf unbekanntem Marker {} ignoriert", marker_id);
        return Ok(());
    };
    if marker.page != state.view.page {
        log::debug!("Marker {} liegt nicht auf Seite {}", marker_id, state.view.page);
        return Ok(());
    }

    let container = state.view.container.unwrap_or_default();
    let started = state
        .drag
        .pointer_down(state.view.mode, marker, handle, pointer, container)?;
    if started {
        state.view.drag_override = None;
    }
    Ok(())
}

/// Merkt sich die letzte Pointer-Position der Session.
pub fn update(state: &mut AppState, pointer: PointerPos) {
    state.drag.pointer_move(pointer);
}

/// Übernimmt höchstens einen Zwischenstand pro Frame in die Ansicht.
pub fn apply_frame(state: &mut AppState) {
    if let Some(preview) = state.drag.animation_frame() {
        state.view.drag_override = Some(preview);
    }
}

/// Beendet die Session und persistiert den Endwert der Release-Position.
///
/// Schlägt das Speichern fehl, springt die Ansicht auf den bestätigten Wert zurück.
pub async fn end<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    pointer: PointerPos,
) -> anyhow::Result<()> {
    let commit = match state.drag.pointer_up(pointer) {
        Ok(Some(commit)) => commit,
        Ok(None) => {
            state.view.drag_override = None;
            return Ok(());
        }
        Err(err) => {
            state.view.drag_override = None;
            return Err(err.into());
        }
    };

    // Endwert bis zur Server-Antwort anzeigen
    state.view.drag_override = Some(DragPreview {
        marker_id: commit.marker_id,
        change: commit.change,
    });

    let patch = match commit.change {
        DragChange::Position(position) => MarkerPatch::position(position),
        DragChange::Size(size) => MarkerPatch::size(size),
    };
    let result = state.store.update(backend, commit.marker_id, &patch).await;
    state.view.drag_override = None;
    result.with_context(|| format!("Marker {} konnte nicht gespeichert werden", commit.marker_id))?;
    Ok(())
}
