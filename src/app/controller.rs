//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::api::FloorplanBackend;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Der Controller besitzt die Persistenz; alle Marker-Mutationen laufen über ihn.
pub struct AppController<B: FloorplanBackend> {
    backend: B,
}

impl<B: FloorplanBackend> AppController<B> {
    /// Erstellt einen neuen Controller.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Zugriff auf die Persistenz (z.B. für Tests).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub async fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command).await?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Fehler landen zusätzlich als Benachrichtigung im UI-State.
    pub async fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        let result = self.dispatch(state, command).await;
        if let Err(err) = &result {
            log::error!("Command fehlgeschlagen: {err:#}");
            state.notify_error(format!("{err:#}"));
        }
        result
    }

    async fn dispatch(&self, state: &mut AppState, command: AppCommand) -> anyhow::Result<()> {
        use super::handlers;
        let backend = &self.backend;

        match command {
            // === Marker-Daten ===
            AppCommand::LoadMarkers { floorplan_id } => {
                handlers::markers::load(state, backend, floorplan_id).await?
            }
            AppCommand::CreateMarker { draft } => {
                handlers::markers::create(state, backend, draft).await?
            }
            AppCommand::UpdateMarker { marker_id, patch } => {
                handlers::markers::update(state, backend, marker_id, patch).await?
            }
            AppCommand::DeleteMarker { marker_id } => {
                handlers::markers::delete(state, backend, marker_id).await?
            }
            AppCommand::DuplicateMarker { marker_id } => {
                handlers::markers::duplicate(state, backend, marker_id).await?
            }

            // === Ansicht ===
            AppCommand::SetPage { page } => handlers::view::set_page(state, page),
            AppCommand::SetViewerMode { mode } => handlers::view::set_mode(state, mode),
            AppCommand::SetContainerRect { rect } => handlers::view::set_container(state, rect)?,

            // === Drag/Resize ===
            AppCommand::BeginMarkerDrag {
                marker_id,
                handle,
                pointer,
            } => handlers::drag::begin(state, marker_id, handle, pointer)?,
            AppCommand::UpdateMarkerDrag { pointer } => handlers::drag::update(state, pointer),
            AppCommand::ApplyDragFrame => handlers::drag::frame(state),
            AppCommand::EndMarkerDrag { pointer } => {
                handlers::drag::end(state, backend, pointer).await?
            }

            // === Dialoge ===
            AppCommand::OpenPlacementDialog { pointer } => {
                handlers::dialog::open_placement(state, pointer)?
            }
            AppCommand::ClosePlacementDialog => handlers::dialog::close_placement(state),
            AppCommand::DismissNotification { index } => {
                handlers::dialog::dismiss_notification(state, index)
            }
        }

        Ok(())
    }
}
