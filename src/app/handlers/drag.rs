//! Handler für Drag- und Resize-Sessions.

use floorplan_engine::{MarkerHandle, PointerPos};

use crate::api::FloorplanBackend;
use crate::app::AppState;
use crate::app::use_cases;

/// Startet eine Session über einem Marker.
pub fn begin(
    state: &mut AppState,
    marker_id: u64,
    handle: MarkerHandle,
    pointer: PointerPos,
) -> anyhow::Result<()> {
    use_cases::drag::begin(state, marker_id, handle, pointer)
}

/// Merkt sich die letzte Pointer-Position.
pub fn update(state: &mut AppState, pointer: PointerPos) {
    use_cases::drag::update(state, pointer);
}

/// Übernimmt den gedrosselten Zwischenstand in die Ansicht.
pub fn frame(state: &mut AppState) {
    use_cases::drag::apply_frame(state);
}

/// Beendet die Session und persistiert den Endwert.
pub async fn end<B: FloorplanBackend>(
    state: &mut AppState,
    backend: &B,
    pointer: PointerPos,
) -> anyhow::Result<()> {
    use_cases::drag::end(state, backend, pointer).await
}
