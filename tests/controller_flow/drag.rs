use floorplan_engine::{
    ContainerRect, DragChange, MarkerHandle, MarkerSize, MarkerType, PercentPos, ViewerMode,
};
use site_walk_floorplan::AppIntent;
use site_walk_floorplan::app::build_render_scene;

use crate::common::{MockBackend, marker};
use crate::{moved, opened, press, released};

fn backend_with_two_cameras() -> MockBackend {
    let backend = MockBackend::new();
    backend.seed(marker(1, MarkerType::Camera, 10.0, 10.0));
    backend.seed(marker(2, MarkerType::Camera, 80.0, 80.0));
    backend
}

#[tokio::test]
async fn test_drag_commits_release_position_exactly_once() {
    let (mut controller, mut state) = opened(backend_with_two_cameras()).await;

    controller
        .handle_intent(&mut state, press(1, MarkerHandle::Body, 20.0, 10.0))
        .await
        .unwrap();
    for x in [30.0, 40.0, 60.0, 80.0] {
        controller.handle_intent(&mut state, moved(x, 30.0)).await.unwrap();
    }
    controller
        .handle_intent(&mut state, AppIntent::AnimationFrame)
        .await
        .unwrap();

    // Zwischenstand nur in der Ansicht
    let preview = state.view.drag_override.expect("Zwischenstand erwartet");
    assert_eq!(preview.change, DragChange::Position(PercentPos::new(40.0, 30.0)));
    assert_eq!(state.store.get(1).unwrap().position(), PercentPos::new(10.0, 10.0));
    assert_eq!(controller.backend().calls().update_marker, 0);

    controller
        .handle_intent(&mut state, released(100.0, 50.0))
        .await
        .unwrap();

    assert_eq!(controller.backend().calls().update_marker, 1);
    let (id, body) = controller.backend().updates().pop().unwrap();
    assert_eq!(id, 1);
    assert_eq!(body.position_x, Some(50.0));
    assert_eq!(body.position_y, Some(50.0));
    assert_eq!(state.store.get(1).unwrap().position(), PercentPos::new(50.0, 50.0));
    assert!(state.view.drag_override.is_none());
    assert!(!state.drag.is_active());
}

#[tokio::test]
async fn test_relayout_during_drag_commits_against_new_container() {
    let (mut controller, mut state) = opened(backend_with_two_cameras()).await;

    controller
        .handle_intent(&mut state, press(1, MarkerHandle::Body, 20.0, 10.0))
        .await
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ContainerResized {
                rect: ContainerRect::new(0.0, 0.0, 400.0, 200.0),
            },
        )
        .await
        .unwrap();
    assert!(state.drag.is_active());

    controller
        .handle_intent(&mut state, released(200.0, 100.0))
        .await
        .unwrap();

    // Gegen die alte 200x100-Box wären es 100/100 gewesen
    assert_eq!(controller.backend().calls().update_marker, 1);
    assert_eq!(state.store.get(1).unwrap().position(), PercentPos::new(50.0, 50.0));
}

#[tokio::test]
async fn test_second_marker_is_ignored_while_dragging() {
    let (mut controller, mut state) = opened(backend_with_two_cameras()).await;

    controller
        .handle_intent(&mut state, press(1, MarkerHandle::Body, 20.0, 10.0))
        .await
        .unwrap();
    controller
        .handle_intent(&mut state, press(2, MarkerHandle::Resize, 160.0, 80.0))
        .await
        .unwrap();

    assert_eq!(state.drag.active_marker(), Some(1));

    controller
        .handle_intent(&mut state, released(40.0, 20.0))
        .await
        .unwrap();
    let updates = controller.backend().updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, 1);
}

#[tokio::test]
async fn test_click_without_movement_sends_nothing() {
    let (mut controller, mut state) = opened(backend_with_two_cameras()).await;

    controller
        .handle_intent(&mut state, press(1, MarkerHandle::Body, 20.0, 10.0))
        .await
        .unwrap();
    controller
        .handle_intent(&mut state, released(20.0, 10.0))
        .await
        .unwrap();

    assert_eq!(controller.backend().calls().update_marker, 0);
    assert!(!state.drag.is_active());
}

#[tokio::test]
async fn test_failed_commit_reverts_to_confirmed_position() {
    let (mut controller, mut state) = opened(backend_with_two_cameras()).await;
    controller.backend().fail(|f| f.update_marker = true);

    controller
        .handle_intent(&mut state, press(1, MarkerHandle::Body, 20.0, 10.0))
        .await
        .unwrap();
    controller.handle_intent(&mut state, moved(100.0, 50.0)).await.unwrap();
    controller
        .handle_intent(&mut state, AppIntent::AnimationFrame)
        .await
        .unwrap();
    let result = controller.handle_intent(&mut state, released(100.0, 50.0)).await;

    assert!(result.is_err());
    assert!(state.last_error().is_some());
    assert!(!state.drag.is_active());
    let scene = build_render_scene(&state);
    assert_eq!(scene.marker(1).unwrap().position, PercentPos::new(10.0, 10.0));
}

#[tokio::test]
async fn test_resize_is_floored_at_min_size() {
    let (mut controller, mut state) = opened(backend_with_two_cameras()).await;

    controller
        .handle_intent(&mut state, press(2, MarkerHandle::Resize, 160.0, 80.0))
        .await
        .unwrap();
    controller
        .handle_intent(&mut state, released(60.0, 0.0))
        .await
        .unwrap();

    let min = state.options.min_marker_size;
    assert_eq!(state.store.get(2).unwrap().size(), Some(MarkerSize::new(min, min)));
}

#[tokio::test]
async fn test_resize_grows_by_pointer_delta() {
    let (mut controller, mut state) = opened(backend_with_two_cameras()).await;

    controller
        .handle_intent(&mut state, press(2, MarkerHandle::Resize, 160.0, 80.0))
        .await
        .unwrap();
    controller
        .handle_intent(&mut state, released(178.0, 90.0))
        .await
        .unwrap();

    // Kamera-Standardgröße 32x32 + (18, 10)
    assert_eq!(state.store.get(2).unwrap().size(), Some(MarkerSize::new(50.0, 42.0)));
    // Position bleibt beim Resize unverändert
    assert_eq!(state.store.get(2).unwrap().position(), PercentPos::new(80.0, 80.0));
}

#[tokio::test]
async fn test_no_session_outside_select_mode() {
    let (mut controller, mut state) = opened(backend_with_two_cameras()).await;
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewerModeChanged {
                mode: ViewerMode::Pan,
            },
        )
        .await
        .unwrap();

    controller
        .handle_intent(&mut state, press(1, MarkerHandle::Body, 20.0, 10.0))
        .await
        .unwrap();
    controller
        .handle_intent(&mut state, released(100.0, 50.0))
        .await
        .unwrap();

    assert!(!state.drag.is_active());
    assert_eq!(controller.backend().calls().update_marker, 0);
}

#[tokio::test]
async fn test_page_change_discards_session() {
    let (mut controller, mut state) = opened(backend_with_two_cameras()).await;

    controller
        .handle_intent(&mut state, press(1, MarkerHandle::Body, 20.0, 10.0))
        .await
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::PageChanged { page: 2 })
        .await
        .unwrap();
    controller
        .handle_intent(&mut state, released(100.0, 50.0))
        .await
        .unwrap();

    assert!(!state.drag.is_active());
    assert_eq!(controller.backend().calls().update_marker, 0);
}
