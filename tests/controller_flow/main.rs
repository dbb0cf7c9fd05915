//! Ablauf-Tests über Controller, Intent-Mapping und Store.

#[path = "../common/mod.rs"]
mod common;

mod drag;
mod markers;

use common::MockBackend;
use floorplan_engine::{ContainerRect, MarkerHandle, PointerPos};
use site_walk_floorplan::{AppController, AppIntent, AppState, PointerTarget};

/// Controller mit geladenem Floorplan 1 und gelayoutetem 200x100-Container.
pub async fn opened(backend: MockBackend) -> (AppController<MockBackend>, AppState) {
    let mut controller = AppController::new(backend);
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::FloorplanOpened { floorplan_id: 1 })
        .await
        .expect("Floorplan sollte laden");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ContainerResized {
                rect: ContainerRect::new(0.0, 0.0, 200.0, 100.0),
            },
        )
        .await
        .expect("Layout sollte gesetzt werden");
    (controller, state)
}

pub fn press(marker_id: u64, handle: MarkerHandle, x: f64, y: f64) -> AppIntent {
    AppIntent::PointerPressed {
        pointer: PointerPos::new(x, y),
        target: Some(PointerTarget { marker_id, handle }),
    }
}

pub fn moved(x: f64, y: f64) -> AppIntent {
    AppIntent::PointerMoved {
        pointer: PointerPos::new(x, y),
    }
}

pub fn released(x: f64, y: f64) -> AppIntent {
    AppIntent::PointerReleased {
        pointer: PointerPos::new(x, y),
    }
}
