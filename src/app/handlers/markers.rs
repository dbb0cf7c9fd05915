//! Handler für Laden, Anlegen, Ändern, Löschen und Duplizieren von Markern.

use floorplan_engine::{MarkerDraft, MarkerPatch};

use crate::api::FloorplanBackend;
use crate::app::AppState;
use crate::app::use_cases;

/// Lädt die Marker eines Floorplans.
pub async fn load<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    floorplan_id: i64,
) -> anyhow::Result<()> {
    use_cases::markers::load(state, backend, floorplan_id).await
}

/// Legt einen neuen Marker an.
pub async fn create<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    draft: MarkerDraft,
) -> anyhow::Result<()> {
    use_cases::markers::create(state, backend, &draft).await
}

/// Ändert Felder eines Markers.
pub async fn update<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    marker_id: u64,
    patch: MarkerPatch,
) -> anyhow::Result<()> {
    use_cases::markers::update(state, backend, marker_id, &patch).await
}

/// Löscht einen Marker.
pub async fn delete<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    marker_id: u64,
) -> anyhow::Result<()> {
    use_cases::markers::delete(state, backend, marker_id).await
}

/// Dupliziert einen Marker.
pub async fn duplicate<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    marker_id: u64,
) -> anyhow::Result<()> {
    use_cases::markers::duplicate(state, backend, marker_id).await
}
