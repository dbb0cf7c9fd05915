use floorplan_engine::{ContainerRect, MarkerType, PercentPos, PointerPos, ViewerMode};
use site_walk_floorplan::app::build_render_scene;
use site_walk_floorplan::{AppCommand, AppController, AppIntent, AppState};

use crate::common::{MockBackend, marker};
use crate::opened;

fn labels(state: &AppState) -> Vec<String> {
    build_render_scene(state)
        .markers
        .into_iter()
        .map(|m| m.display_label)
        .collect()
}

async fn click_in_add_mode(
    controller: &mut AppController<MockBackend>,
    state: &mut AppState,
    x: f64,
    y: f64,
) {
    controller
        .handle_intent(
            state,
            AppIntent::ViewerModeChanged {
                mode: ViewerMode::AddMarker,
            },
        )
        .await
        .unwrap();
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                pointer: PointerPos::new(x, y),
                target: None,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_placement_flow_creates_equipment_and_marker() {
    let (mut controller, mut state) = opened(MockBackend::new()).await;

    click_in_add_mode(&mut controller, &mut state, 50.0, 25.0).await;
    assert!(state.ui.placement_dialog.visible);
    assert_eq!(
        state.ui.placement_dialog.position,
        Some(PercentPos::new(25.0, 25.0))
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::PlacementConfirmed {
                marker_type: MarkerType::AccessPoint,
                label: Some("Main entrance".to_string()),
                equipment_id: None,
            },
        )
        .await
        .unwrap();

    assert!(!state.ui.placement_dialog.visible);
    assert_eq!(controller.backend().calls().create_equipment, 1);
    assert_eq!(state.store.len(), 1);
    let created = &state.store.markers()[0];
    assert_eq!(created.position(), PercentPos::new(25.0, 25.0));
    assert_eq!(labels(&state), vec!["AP1"]);
}

#[tokio::test]
async fn test_placement_click_before_layout_is_replayed() {
    let mut controller = AppController::new(MockBackend::new());
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::FloorplanOpened { floorplan_id: 1 })
        .await
        .unwrap();

    click_in_add_mode(&mut controller, &mut state, 50.0, 50.0).await;
    assert!(!state.ui.placement_dialog.visible);
    assert!(state.view.pending_placement.is_some());

    controller
        .handle_intent(
            &mut state,
            AppIntent::ContainerResized {
                rect: ContainerRect::new(0.0, 0.0, 100.0, 100.0),
            },
        )
        .await
        .unwrap();

    assert!(state.ui.placement_dialog.visible);
    assert_eq!(
        state.ui.placement_dialog.position,
        Some(PercentPos::new(50.0, 50.0))
    );
}

#[tokio::test]
async fn test_switching_floorplan_discards_open_placement() {
    let backend = MockBackend::new();
    backend.seed(marker(1, MarkerType::Camera, 10.0, 10.0));
    let (mut controller, mut state) = opened(backend).await;
    controller
        .handle_intent(&mut state, AppIntent::PageChanged { page: 2 })
        .await
        .unwrap();
    click_in_add_mode(&mut controller, &mut state, 50.0, 25.0).await;
    assert!(state.ui.placement_dialog.visible);

    controller
        .handle_intent(&mut state, AppIntent::FloorplanOpened { floorplan_id: 2 })
        .await
        .unwrap();

    assert_eq!(state.store.floorplan_id(), Some(2));
    assert!(!state.ui.placement_dialog.visible);
    assert!(state.ui.placement_dialog.position.is_none());
    assert!(state.view.pending_placement.is_none());
    assert_eq!(state.view.page, 1);

    // Bestätigung ohne Klick auf dem neuen Dokument legt nichts an
    let result = controller
        .handle_intent(
            &mut state,
            AppIntent::PlacementConfirmed {
                marker_type: MarkerType::Camera,
                label: None,
                equipment_id: None,
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(controller.backend().calls().create_equipment, 0);
    assert_eq!(controller.backend().calls().create_marker, 0);
    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_failed_create_keeps_dialog_open_and_notifies() {
    let (mut controller, mut state) = opened(MockBackend::new()).await;
    controller.backend().fail(|f| f.create_marker = true);

    click_in_add_mode(&mut controller, &mut state, 50.0, 25.0).await;
    let result = controller
        .handle_intent(
            &mut state,
            AppIntent::PlacementConfirmed {
                marker_type: MarkerType::Camera,
                label: None,
                equipment_id: None,
            },
        )
        .await;

    assert!(result.is_err());
    assert!(state.ui.placement_dialog.visible);
    assert!(state.store.is_empty());
    assert_eq!(state.ui.notifications.len(), 1);
    // Equipment wurde zurückgerollt
    assert!(controller.backend().equipment().is_empty());
}

#[tokio::test]
async fn test_note_placement_uses_default_label() {
    let (mut controller, mut state) = opened(MockBackend::new()).await;

    click_in_add_mode(&mut controller, &mut state, 10.0, 10.0).await;
    controller
        .handle_intent(
            &mut state,
            AppIntent::PlacementConfirmed {
                marker_type: MarkerType::Note,
                label: Some("   ".to_string()),
                equipment_id: None,
            },
        )
        .await
        .unwrap();

    let note = &state.store.markers()[0];
    assert_eq!(note.label.as_deref(), Some("Note"));
    assert_eq!(note.equipment_id, -1);
    assert_eq!(controller.backend().calls().create_equipment, 0);
}

#[tokio::test]
async fn test_delete_renumbers_remaining_markers() {
    let backend = MockBackend::new();
    for id in [3, 7, 9] {
        backend.seed(marker(id, MarkerType::Camera, 10.0, 10.0));
    }
    let (mut controller, mut state) = opened(backend).await;
    assert_eq!(labels(&state), vec!["C1", "C2", "C3"]);

    controller
        .handle_intent(&mut state, AppIntent::MarkerDeleteRequested { marker_id: 7 })
        .await
        .unwrap();

    assert_eq!(labels(&state), vec!["C1", "C2"]);
    assert!(state.store.get(7).is_none());
}

#[tokio::test]
async fn test_failed_delete_keeps_marker() {
    let backend = MockBackend::new();
    backend.seed(marker(1, MarkerType::Elevator, 10.0, 10.0));
    let (mut controller, mut state) = opened(backend).await;
    controller.backend().fail(|f| f.delete_marker = true);

    let result = controller
        .handle_intent(&mut state, AppIntent::MarkerDeleteRequested { marker_id: 1 })
        .await;

    assert!(result.is_err());
    assert!(state.store.get(1).is_some());
    assert!(state.last_error().is_some());
}

#[tokio::test]
async fn test_duplicate_requested_offsets_copy() {
    let backend = MockBackend::new();
    backend.seed(marker(1, MarkerType::Intercom, 40.0, 40.0));
    let (mut controller, mut state) = opened(backend).await;

    controller
        .handle_intent(&mut state, AppIntent::MarkerDuplicateRequested { marker_id: 1 })
        .await
        .unwrap();

    assert_eq!(state.store.len(), 2);
    let copy = state.store.markers().iter().find(|m| m.id != 1).unwrap();
    let offset = state.options.duplicate_offset_percent;
    assert_eq!(copy.position(), PercentPos::new(40.0 + offset, 40.0 + offset));
    assert_eq!(labels(&state), vec!["I1", "I2"]);
}

#[tokio::test]
async fn test_duplicate_unknown_marker_is_an_error() {
    let (mut controller, mut state) = opened(MockBackend::new()).await;

    let result = controller
        .handle_intent(&mut state, AppIntent::MarkerDuplicateRequested { marker_id: 42 })
        .await;

    assert!(result.is_err());
    assert_eq!(controller.backend().calls().create_marker, 0);
}

#[tokio::test]
async fn test_label_with_trailing_number_overrides_sequence() {
    let backend = MockBackend::new();
    backend.seed(marker(1, MarkerType::AccessPoint, 10.0, 10.0));
    backend.seed(marker(2, MarkerType::AccessPoint, 20.0, 20.0));
    let (mut controller, mut state) = opened(backend).await;

    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerLabelEdited {
                marker_id: 2,
                label: Some("Door 12".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(labels(&state), vec!["AP1", "AP12"]);
}

#[tokio::test]
async fn test_reload_fetches_again_and_logs_command() {
    let backend = MockBackend::new();
    backend.seed(marker(1, MarkerType::Camera, 10.0, 10.0));
    let (mut controller, mut state) = opened(backend).await;

    controller
        .handle_intent(&mut state, AppIntent::ReloadRequested)
        .await
        .unwrap();

    assert_eq!(controller.backend().calls().list_markers, 2);
    match state.command_log.entries().last() {
        Some(AppCommand::LoadMarkers { floorplan_id: 1 }) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_load_notifies_once() {
    let backend = MockBackend::new();
    backend.fail(|f| f.list_markers = true);
    let mut controller = AppController::new(backend);
    let mut state = AppState::new();

    let result = controller
        .handle_intent(&mut state, AppIntent::FloorplanOpened { floorplan_id: 1 })
        .await;

    assert!(result.is_err());
    assert_eq!(state.ui.notifications.len(), 1);
    assert!(state.store.is_empty());
}
