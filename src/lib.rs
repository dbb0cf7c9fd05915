//! Site-Walk Floorplan Library.
//! Marker-Verwaltung für Floorplans als Library exportiert für Tests und Wiederverwendung.

pub mod api;
pub mod app;
pub mod shared;
pub mod store;

pub use api::{ApiError, FloorplanBackend, RestClient};
pub use app::{AppCommand, AppController, AppIntent, AppState, PointerTarget, UiState, ViewState};
pub use shared::{MarkerView, RenderScene, ViewerOptions};
pub use store::{MarkerStore, StoreError};
