//! Builder für Render-Szenen aus dem AppState.

use floorplan_engine::{DragChange, display_label, sequence_numbers, to_pixels};

use crate::app::AppState;
use crate::shared::{MarkerView, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Sequenznummern werden über alle Marker des Floorplans berechnet, angezeigt
/// werden nur die Marker der aktuellen Seite.
pub fn build(state: &AppState) -> RenderScene {
    let all = state.store.markers();
    let numbers = sequence_numbers(all);
    let container = state
        .view
        .container
        .filter(|rect| rect.is_laid_out());
    let active = state.drag.active_marker();

    let mut markers: Vec<MarkerView> = state
        .store
        .markers_on_page(state.view.page)
        .map(|marker| {
            let mut position = marker.position();
            let mut size = marker.effective_size();
            if let Some(preview) = state
                .view
                .drag_override
                .filter(|preview| preview.marker_id == marker.id)
            {
                match preview.change {
                    DragChange::Position(p) => position = p,
                    DragChange::Size(s) => size = s,
                }
            }

            let sequence = numbers.get(&marker.id).copied().unwrap_or(1);
            MarkerView {
                marker_id: marker.id,
                marker_type: marker.marker_type,
                display_label: display_label(marker, sequence),
                label: marker.label.clone(),
                position,
                pixels: container.map(|rect| to_pixels(position, rect)),
                size,
                is_dragging: active == Some(marker.id),
            }
        })
        .collect();
    markers.sort_by_key(|m| m.marker_id);

    RenderScene {
        page: state.view.page,
        mode: state.view.mode,
        container,
        markers,
    }
}
