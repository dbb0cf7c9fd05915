//! Mapping von UI-Intents auf mutierende App-Commands.

use floorplan_engine::marker::{NEW_EQUIPMENT_ID, NOTE_EQUIPMENT_ID};
use floorplan_engine::{MarkerDraft, MarkerPatch, ViewerMode};

use super::events::PointerTarget;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FloorplanOpened { floorplan_id } => {
            vec![AppCommand::LoadMarkers { floorplan_id }]
        }
        AppIntent::ReloadRequested => state
            .store
            .floorplan_id()
            .map(|floorplan_id| AppCommand::LoadMarkers { floorplan_id })
            .into_iter()
            .collect(),
        AppIntent::PageChanged { page } => vec![AppCommand::SetPage { page }],
        AppIntent::ViewerModeChanged { mode } => vec![AppCommand::SetViewerMode { mode }],
        AppIntent::ContainerResized { rect } => vec![AppCommand::SetContainerRect { rect }],
        AppIntent::PointerPressed { pointer, target } => match (state.view.mode, target) {
            (
                ViewerMode::Select,
                Some(PointerTarget {
                    marker_id,
                    handle,
                }),
            ) => vec![AppCommand::BeginMarkerDrag {
                marker_id,
                handle,
                pointer,
            }],
            (ViewerMode::AddMarker, None) if !state.ui.placement_dialog.visible => {
                vec![AppCommand::OpenPlacementDialog { pointer }]
            }
            _ => vec![],
        },
        AppIntent::PointerMoved { pointer } if state.drag.is_active() => {
            vec![AppCommand::UpdateMarkerDrag { pointer }]
        }
        AppIntent::PointerMoved { .. } => vec![],
        AppIntent::PointerReleased { pointer } if state.drag.is_active() => {
            vec![AppCommand::EndMarkerDrag { pointer }]
        }
        AppIntent::PointerReleased { .. } => vec![],
        AppIntent::AnimationFrame if state.drag.is_active() => vec![AppCommand::ApplyDragFrame],
        AppIntent::AnimationFrame => vec![],
        AppIntent::PlacementConfirmed {
            marker_type,
            label,
            equipment_id,
        } => {
            let position = state.ui.placement_dialog.position;
            let equipment_id = equipment_id.unwrap_or(if marker_type.is_note() {
                NOTE_EQUIPMENT_ID
            } else {
                NEW_EQUIPMENT_ID
            });
            let draft = MarkerDraft {
                floorplan_id: state.store.floorplan_id(),
                page: Some(state.view.page),
                marker_type: Some(marker_type),
                equipment_id: Some(equipment_id),
                position_x: position.map(|p| p.x),
                position_y: position.map(|p| p.y),
                label,
                size: None,
            };
            vec![
                AppCommand::CreateMarker { draft },
                AppCommand::ClosePlacementDialog,
            ]
        }
        AppIntent::PlacementCancelled => vec![AppCommand::ClosePlacementDialog],
        AppIntent::MarkerLabelEdited { marker_id, label } => vec![AppCommand::UpdateMarker {
            marker_id,
            patch: MarkerPatch::label(label),
        }],
        AppIntent::MarkerDeleteRequested { marker_id } => {
            vec![AppCommand::DeleteMarker { marker_id }]
        }
        AppIntent::MarkerDuplicateRequested { marker_id } => {
            vec![AppCommand::DuplicateMarker { marker_id }]
        }
        AppIntent::NotificationDismissed { index } => {
            vec![AppCommand::DismissNotification { index }]
        }
    }
}
