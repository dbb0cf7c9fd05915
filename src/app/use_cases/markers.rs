//! Use-Case-Funktionen für Marker-CRUD über den Store.

use anyhow::Context;
use floorplan_engine::{MarkerDraft, MarkerPatch};

use super::viewer;
use crate::api::FloorplanBackend;
use crate::app::AppState;

/// Lädt alle Marker eines Floorplans.
///
/// Beim Wechsel des Floorplans werden Sessions, Zwischenstände und offene
/// Platzierungen verworfen und die Startseite angezeigt. Schlägt das Laden
/// fehl, bleibt der bisherige Stand sichtbar.
pub async fn load<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    floorplan_id: i64,
) -> anyhow::Result<()> {
    let switched = state.store.floorplan_id() != Some(floorplan_id);
    state.store.load(backend, floorplan_id).await?;
    if switched {
        viewer::reset_for_floorplan(state);
    }
    Ok(())
}

/// Legt einen Marker an (ggf. inklusive neuem Equipment).
pub async fn create<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    draft: &MarkerDraft,
) -> anyhow::Result<()> {
    let marker = state.store.create(backend, draft).await?;
    state.notify_info(format!("{} platziert", marker.marker_type));
    Ok(())
}

/// Ändert Felder eines Markers. Ein leerer Patch ist ein No-op.
pub async fn update<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    marker_id: u64,
    patch: &MarkerPatch,
) -> anyhow::Result<()> {
    if patch.is_empty() {
        log::debug!("Leerer Patch für Marker {} ignoriert", marker_id);
        return Ok(());
    }
    state.store.update(backend, marker_id, patch).await?;
    Ok(())
}

/// Löscht einen Marker. Eine laufende Session auf diesem Marker wird verworfen.
pub async fn delete<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    marker_id: u64,
) -> anyhow::Result<()> {
    state.store.remove(backend, marker_id).await?;

    if state.drag.active_marker() == Some(marker_id) {
        state.drag.cancel();
    }
    if state
        .view
        .drag_override
        .is_some_and(|preview| preview.marker_id == marker_id)
    {
        state.view.drag_override = None;
    }
    Ok(())
}

/// Dupliziert einen Marker mit dem konfigurierten Versatz.
pub async fn duplicate<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    marker_id: u64,
) -> anyhow::Result<()> {
    let source = state
        .store
        .get(marker_id)
        .cloned()
        .with_context(|| format!("Marker {marker_id} nicht gefunden"))?;
    let offset = state.options.duplicate_offset_percent;
    state.store.duplicate(backend, &source, offset).await?;
    Ok(())
}
